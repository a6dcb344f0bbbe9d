//! The backend reports point totals either as a plain number, a list, or a
//! map keyed by role. Everything is folded into a single sum.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointsRepr {
    Number(f64),
    List(Vec<Option<f64>>),
    ByRole(BTreeMap<String, Option<f64>>),
}

impl PointsRepr {
    fn total(self) -> f64 {
        match self {
            PointsRepr::Number(n) => n,
            PointsRepr::List(values) => values.into_iter().flatten().sum(),
            PointsRepr::ByRole(values) => values.into_values().flatten().sum(),
        }
    }
}

pub(crate) fn deserialize_points<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PointsRepr>::deserialize(deserializer)?
        .map(PointsRepr::total)
        .unwrap_or(0.0))
}
