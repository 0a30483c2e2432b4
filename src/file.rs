//! Files of the file manager

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{CategoricalFilter, Collection, Schema};
use crate::error::ValidationError;
use crate::item::{Flags, ItemId, NoStatus};
use crate::traits::{Draft, Record};
use crate::utils::human_size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Image,
    Document,
    Video,
    Audio,
    Other,
}

impl FileKind {
    /// Guess the kind of a file from its extension
    pub fn from_file_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("svg") | Some("webp") | Some("fig") => FileKind::Image,
            Some("pdf") | Some("doc") | Some("docx") | Some("ppt") | Some("pptx") | Some("xls") | Some("xlsx") | Some("txt") | Some("md") => FileKind::Document,
            Some("mp4") | Some("mov") | Some("avi") | Some("mkv") | Some("webm") => FileKind::Video,
            Some("mp3") | Some("wav") | Some("flac") | Some("ogg") | Some("m4a") => FileKind::Audio,
            _ => FileKind::Other,
        }
    }
}

/// A file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    id: ItemId,
    name: String,
    kind: FileKind,
    /// Size in bytes
    size: u64,
    modified: NaiveDate,
    #[serde(default)]
    flags: Flags,
}

impl File {
    pub fn kind(&self) -> FileKind       { self.kind     }
    pub fn size(&self) -> u64            { self.size     }
    pub fn modified(&self) -> NaiveDate  { self.modified }
    pub fn is_shared(&self) -> bool      { self.flags.contains(Flags::SHARED)  }
    pub fn is_starred(&self) -> bool     { self.flags.contains(Flags::STARRED) }

    /// The size, as displayed (e.g. `2.4 MB`)
    pub fn display_size(&self) -> String {
        human_size(self.size)
    }
}

impl Record for File {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new()
            .require("name")
            .flags(Flags::SHARED | Flags::STARRED)
            .filter("shared", CategoricalFilter::With(Flags::SHARED))
            .filter("starred", CategoricalFilter::With(Flags::STARRED))
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.name }
    fn flags(&self) -> Flags { self.flags }
    fn set_flags(&mut self, flags: Flags) { self.flags = flags; }
}


/// The upload form
#[derive(Clone, Debug, Default)]
pub struct FileDraft {
    pub name: String,
    pub size: u64,
}

impl Draft for FileDraft {
    type Record = File;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn into_record(self, id: ItemId) -> Result<File, ValidationError> {
        let name = sanitize_filename::sanitize(self.name.trim());
        if name.is_empty() {
            return Err(ValidationError::invalid("name", "this is not a valid file name"));
        }

        Ok(File {
            id,
            kind: FileKind::from_file_name(&name),
            name,
            size: self.size,
            modified: chrono::Local::now().date_naive(),
            flags: Flags::empty(),
        })
    }
}


/// The view model of the file manager
pub type FileManager = Collection<File>;

impl Collection<File> {
    pub fn toggle_starred(&mut self, id: ItemId) -> bool {
        self.toggle_flag(id, Flags::STARRED)
    }

    pub fn toggle_shared(&mut self, id: ItemId) -> bool {
        self.toggle_flag(id, Flags::SHARED)
    }

    /// Add an uploaded file at the end of the list
    pub fn upload(&mut self, draft: FileDraft) -> Result<&File, ValidationError> {
        self.create(draft)
    }

    /// Total size of the files currently displayed
    pub fn visible_size(&self) -> u64 {
        self.filtered_view().map(|f| f.size).sum()
    }
}
