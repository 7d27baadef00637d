use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label used when a resource code matches none of the regions.
pub const OTHER_REGION_LABEL: &str = "Outra";

/// Label of the "no regional filter" choice.
pub const ALL_REGIONS_LABEL: &str = "Todas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    BarraDoPirai, // BP
    VoltaRedonda, // VR
    TresRios,     // TR
}

impl Region {
    /// Evaluation order of the resource-code test: first match wins.
    pub const ALL: [Region; 3] = [Region::BarraDoPirai, Region::VoltaRedonda, Region::TresRios];

    /// Two-letter code embedded in the crew resource code (e.g. `EQP-VR-12`).
    pub fn code(&self) -> &'static str {
        match self {
            Region::BarraDoPirai => "BP",
            Region::VoltaRedonda => "VR",
            Region::TresRios => "TR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::BarraDoPirai => "Barra do Piraí",
            Region::VoltaRedonda => "Volta Redonda",
            Region::TresRios => "Três Rios",
        }
    }

    /// Work-area codes (`'L' || second field of area_trabalho`) served by
    /// each operational base.
    pub fn work_areas(&self) -> &'static [&'static str] {
        match self {
            Region::BarraDoPirai => &[
                "L700", "L705", "L715", "L716", "L717", "L722", "L723", "L731", "L742", "L745",
                "L747", "L749", "L754", "L762", "L763", "L770", "L830", "L840",
            ],
            Region::TresRios => &[
                "L646", "L707", "L710", "L711", "L713", "L720", "L721", "L740", "L741", "L753",
                "L758", "L760", "L761", "L786", "L788", "L793", "L810", "L825", "L835", "L850",
            ],
            Region::VoltaRedonda => &[
                "L735", "L750", "L752", "L772", "L776", "L777", "L778", "L779", "L782", "L598",
            ],
        }
    }

    /// Work-area test order used by the operational base column: BP, TR, VR.
    pub const BY_WORK_AREA: [Region; 3] =
        [Region::BarraDoPirai, Region::TresRios, Region::VoltaRedonda];

    /// Accepts the label (accents and case ignored) or the two-letter code.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = fold(s);
        Region::ALL
            .into_iter()
            .find(|r| fold(r.label()) == wanted || r.code().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regional filter of a view: everything, or the crews of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    pub fn region(&self) -> Option<Region> {
        match self {
            RegionFilter::All => None,
            RegionFilter::Only(r) => Some(*r),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold(s);
        if folded == "todas" || folded == "all" || folded.is_empty() {
            return Ok(RegionFilter::All);
        }
        Region::parse(s)
            .map(RegionFilter::Only)
            .ok_or_else(|| AppError::InvalidRegion(s.to_string()))
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str(ALL_REGIONS_LABEL),
            RegionFilter::Only(r) => f.write_str(r.label()),
        }
    }
}

/// Lowercase and strip the Portuguese accents used in region names.
fn fold(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
            'é' | 'ê' | 'É' | 'Ê' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
            'ú' | 'Ú' => 'u',
            'ç' | 'Ç' => 'c',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
