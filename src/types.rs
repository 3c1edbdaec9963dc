use std::fmt;
use std::path::{Path, PathBuf};

/// One of the two tracked swimming venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Ado,
    Nordnes,
}

/// How a raw page value is normalized before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Count,
    Temperature,
}

/// One TSV column: its header name, the Norwegian label it is scraped
/// from, and the normalization applied to the raw text.
#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: Kind,
}

const ADO_COLUMNS: &[Column] = &[
    Column { name: "visitors_now", label: "Besøkende nå", kind: Kind::Count },
    Column { name: "visitors_today", label: "Besøkende i dag", kind: Kind::Count },
    Column { name: "visitors_ytd", label: "Besøkende i år", kind: Kind::Count },
    Column { name: "temp_main", label: "Hovedbasseng", kind: Kind::Temperature },
    Column { name: "temp_dive", label: "Stupebasseng", kind: Kind::Temperature },
    Column { name: "temp_hot_tub", label: "Kulp", kind: Kind::Temperature },
    Column { name: "temp_kids", label: "Barnebasseng", kind: Kind::Temperature },
    Column { name: "temp_teaching", label: "Opplæringsbasseng", kind: Kind::Temperature },
    Column { name: "temp_slides", label: "Vannsklier", kind: Kind::Temperature },
];

const NORDNES_COLUMNS: &[Column] = &[
    Column { name: "visitors_now", label: "Besøkende nå", kind: Kind::Count },
    Column { name: "visitors_today", label: "Besøkende i dag", kind: Kind::Count },
    Column { name: "visitors_ytd", label: "Besøkende i år", kind: Kind::Count },
    Column { name: "temp_air", label: "Utetemperatur", kind: Kind::Temperature },
    Column { name: "temp_pool", label: "Hovedbasseng", kind: Kind::Temperature },
    Column { name: "temp_sea", label: "Sjøvann", kind: Kind::Temperature },
];

impl Facility {
    pub const ALL: [Facility; 2] = [Facility::Ado, Facility::Nordnes];

    pub fn slug(&self) -> &'static str {
        match self {
            Facility::Ado => "ado",
            Facility::Nordnes => "nordnes",
        }
    }

    pub fn status_url(&self) -> &'static str {
        match self {
            Facility::Ado => "https://adoarena.no/sanntid/",
            Facility::Nordnes => "https://nordnessjobad.no/sanntid/",
        }
    }

    /// Ordered schema table. The order here is the column order of every
    /// existing log file, so it must never be reshuffled.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Facility::Ado => ADO_COLUMNS,
            Facility::Nordnes => NORDNES_COLUMNS,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        Path::new("data").join(self.slug())
    }

    /// Log file for one UTC calendar year, e.g. `data/ado/2026.tsv`.
    pub fn log_path(&self, year: i32) -> PathBuf {
        self.data_dir().join(format!("{year}.tsv"))
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
