use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of task classifications, in canonical display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    #[serde(rename = "Appliance Maintenance")]
    ApplianceMaintenance,
    #[serde(rename = "Auto Maintenance")]
    AutoMaintenance,
    #[serde(rename = "Energy Efficiency")]
    EnergyEfficiency,
    #[serde(rename = "Home Safety")]
    HomeSafety,
    #[serde(rename = "HVAC")]
    Hvac,
    Seasonal,
    Plumbing,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ApplianceMaintenance,
        Category::AutoMaintenance,
        Category::EnergyEfficiency,
        Category::HomeSafety,
        Category::Hvac,
        Category::Seasonal,
        Category::Plumbing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ApplianceMaintenance => "Appliance Maintenance",
            Self::AutoMaintenance => "Auto Maintenance",
            Self::EnergyEfficiency => "Energy Efficiency",
            Self::HomeSafety => "Home Safety",
            Self::Hvac => "HVAC",
            Self::Seasonal => "Seasonal",
            Self::Plumbing => "Plumbing",
        }
    }

    /// Exact label lookup; anything outside the fixed set resolves to `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Descriptive cadence label; carries no scheduling semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    #[serde(rename = "every")]
    EveryVisit,
    #[serde(rename = "annual")]
    Annual,
    #[serde(rename = "adhoc")]
    AdHoc,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EveryVisit => write!(f, "every"),
            Self::Annual => write!(f, "annual"),
            Self::AdHoc => write!(f, "adhoc"),
        }
    }
}

/// The six bi-monthly scheduling buckets. Not user-creatable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[clap(rename_all = "kebab-case")]
pub enum Period {
    #[serde(rename = "Jan - Feb")]
    JanFeb,
    #[serde(rename = "Mar - Apr")]
    MarApr,
    #[serde(rename = "May - Jun")]
    MayJun,
    #[serde(rename = "Jul - Aug")]
    JulAug,
    #[serde(rename = "Sep - Oct")]
    SepOct,
    #[serde(rename = "Nov - Dec")]
    NovDec,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::JanFeb,
        Period::MarApr,
        Period::MayJun,
        Period::JulAug,
        Period::SepOct,
        Period::NovDec,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::JanFeb => "Jan - Feb",
            Self::MarApr => "Mar - Apr",
            Self::MayJun => "May - Jun",
            Self::JulAug => "Jul - Aug",
            Self::SepOct => "Sep - Oct",
            Self::NovDec => "Nov - Dec",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recurring maintenance task.
///
/// `category` is stored as the raw label so that out-of-set values loaded
/// from an old record survive until `store::tasks::normalize` coerces them
/// to the default. `id` and `category` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub minutes: u32,
    pub category: String,
    pub frequency: Frequency,
    /// Default-selection flag set at creation; reserved, never read by the
    /// scheduling or budget logic.
    pub include: bool,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        minutes: u32,
        category: impl Into<String>,
        frequency: Frequency,
        include: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            minutes,
            category: category.into(),
            frequency,
            include,
        }
    }
}
