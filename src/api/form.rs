use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartState, decimal_to_f64};
use crate::error::ChartResult;

/// Sentinel a selection control reports when no feature is chosen.
pub const UNSELECTED: &str = "-1";

/// One form slot: a feature selection paired with its raw numeric input.
///
/// Raw values come from the form in the 0–100 range and are scaled by
/// exactly ÷10 into the score domain. Pairing selection and value in one
/// slot makes axis/score misalignment unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSlot {
    #[serde(default)]
    pub feature: Option<String>,
    #[serde(default = "default_raw_value")]
    pub raw_value: Decimal,
}

fn default_raw_value() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl FormSlot {
    #[must_use]
    pub fn new(feature: impl Into<String>, raw_value: Decimal) -> Self {
        Self {
            feature: Some(feature.into()),
            raw_value,
        }
    }

    #[must_use]
    pub fn unselected() -> Self {
        Self {
            feature: None,
            raw_value: default_raw_value(),
        }
    }

    /// The chosen feature, unless the slot is empty or at the sentinel.
    #[must_use]
    pub fn selected_feature(&self) -> Option<&str> {
        match self.feature.as_deref() {
            Some(feature) if feature != UNSELECTED && !feature.is_empty() => Some(feature),
            _ => None,
        }
    }

    pub fn resolve_score(&self) -> ChartResult<f64> {
        decimal_to_f64(self.raw_value / Decimal::TEN, "slot value")
    }
}

/// All slots of one submitted form, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub slots: Vec<FormSlot>,
}

impl FormSubmission {
    #[must_use]
    pub fn new(slots: Vec<FormSlot>) -> Self {
        Self { slots }
    }

    /// Rebuilds chart state from the populated slots.
    ///
    /// Slots at the sentinel are skipped and the remainder is compacted,
    /// preserving slot order. An all-sentinel submission resolves to the
    /// empty state.
    pub fn resolve(&self) -> ChartResult<ChartState> {
        let mut resolved: SmallVec<[(String, f64); 8]> = SmallVec::new();
        for slot in &self.slots {
            let Some(feature) = slot.selected_feature() else {
                continue;
            };
            resolved.push((feature.to_owned(), slot.resolve_score()?));
        }

        let (axes, scores) = resolved.into_iter().unzip();
        ChartState::new(axes, scores)
    }
}
