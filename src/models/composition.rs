use clap::ValueEnum;
use serde::Serialize;

/// Crew composition of a shift-start record.
///
/// `Incomplete` iff a lead id is recorded and the auxiliary id is missing;
/// every other combination (including no lead at all) is `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Composition {
    #[value(name = "completa")]
    Complete,
    #[value(name = "incompleta")]
    Incomplete,
}

impl Composition {
    pub fn label(&self) -> &'static str {
        match self {
            Composition::Complete => "completa",
            Composition::Incomplete => "incompleta",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "completa" => Some(Composition::Complete),
            "incompleta" => Some(Composition::Incomplete),
            _ => None,
        }
    }
}
