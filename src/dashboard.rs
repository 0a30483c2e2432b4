//! Dashboard metrics

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Schema};
use crate::item::{ItemId, NoStatus};
use crate::traits::Record;

/// A headline figure, with its change (in percent) over the previous period
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    id: ItemId,
    title: String,
    value: u64,
    change: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Flat,
    Down,
}

impl StatCard {
    pub fn title(&self) -> &str { &self.title }
    pub fn value(&self) -> u64  { self.value  }
    pub fn change(&self) -> i32 { self.change }

    pub fn trend(&self) -> Trend {
        match self.change {
            c if c > 0 => Trend::Up,
            0 => Trend::Flat,
            _ => Trend::Down,
        }
    }
}

impl Record for StatCard {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new()
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.title }
}


/// One point of the sales overview chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub name: String,
    pub sales: u64,
    pub revenue: u64,
}

/// One point of the weekly analysis chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    pub name: String,
    pub value: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Default for Period {
    fn default() -> Self {
        Period::Month
    }
}


/// The view model of the dashboard page. This is read-only.
pub struct Dashboard {
    stats: Collection<StatCard>,
    sales: Vec<SalesPoint>,
    analysis: Vec<AnalysisPoint>,
    period: Period,
}

impl Dashboard {
    pub fn new(stats: Collection<StatCard>, sales: Vec<SalesPoint>, analysis: Vec<AnalysisPoint>) -> Self {
        Self { stats, sales, analysis, period: Period::default() }
    }

    pub fn stats(&self) -> &Collection<StatCard> { &self.stats    }
    pub fn sales(&self) -> &[SalesPoint]         { &self.sales    }
    pub fn analysis(&self) -> &[AnalysisPoint]   { &self.analysis }
    pub fn period(&self) -> Period               { self.period    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Total `(sales, revenue)` over the whole sales series
    pub fn sales_totals(&self) -> (u64, u64) {
        self.sales.iter()
            .fold((0, 0), |(sales, revenue), point| (sales + point.sales, revenue + point.revenue))
    }

    /// The point of the analysis series that has the highest value
    pub fn best_week(&self) -> Option<&AnalysisPoint> {
        self.analysis.iter().max_by_key(|point| point.value)
    }
}
