use crate::error::AnalyticsError;
use crate::table::OutcomeTable;
use core_types::{Emotion, Strategy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Caution,
    Encouraging,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryMessage {
    pub tone: Tone,
    /// The looked-up loss percentage the tone was decided on.
    pub loss_pct: Decimal,
    pub text: String,
}

impl fmt::Display for AdvisoryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The pair of messages shown before entering a new trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub emotion: AdvisoryMessage,
    pub strategy: AdvisoryMessage,
}

/// Threshold lookup over the outcome tables. Not a model: a category whose
/// loss share is above the threshold gets a warning, anything else does not.
#[derive(Debug, Clone)]
pub struct Advisor {
    loss_threshold_pct: Decimal,
}

impl Default for Advisor {
    fn default() -> Self {
        Self {
            loss_threshold_pct: dec!(50),
        }
    }
}

impl Advisor {
    pub fn new(loss_threshold_pct: Decimal) -> Result<Self, AnalyticsError> {
        if loss_threshold_pct < Decimal::ZERO || loss_threshold_pct > Decimal::ONE_HUNDRED {
            return Err(AnalyticsError::InvalidThreshold(loss_threshold_pct));
        }
        Ok(Self { loss_threshold_pct })
    }

    pub fn loss_threshold_pct(&self) -> Decimal {
        self.loss_threshold_pct
    }

    /// Looks up the loss share of the current emotion and the planned strategy.
    /// Categories that were never logged count as 0% loss.
    pub fn advise(
        &self,
        emotion_table: &OutcomeTable<Emotion>,
        strategy_table: &OutcomeTable<Strategy>,
        current_emotion: Emotion,
        planned_strategy: Strategy,
    ) -> Advisory {
        let emotion_loss = emotion_table.loss_pct(current_emotion);
        let strategy_loss = strategy_table.loss_pct(planned_strategy);

        let emotion = if self.is_cautionary(emotion_loss) {
            AdvisoryMessage {
                tone: Tone::Caution,
                loss_pct: emotion_loss,
                text: format!(
                    "Caution: {}% of your trades taken while feeling {} ended in a loss. Consider stepping back before entering.",
                    emotion_loss.round_dp(2).normalize(),
                    current_emotion
                ),
            }
        } else {
            AdvisoryMessage {
                tone: Tone::Encouraging,
                loss_pct: emotion_loss,
                text: format!("You usually perform well when feeling {current_emotion}."),
            }
        };

        let strategy = if self.is_cautionary(strategy_loss) {
            AdvisoryMessage {
                tone: Tone::Caution,
                loss_pct: strategy_loss,
                text: format!(
                    "Caution: {}% of your {} trades ended in a loss. Review the setup before entering.",
                    strategy_loss.round_dp(2).normalize(),
                    planned_strategy
                ),
            }
        } else {
            AdvisoryMessage {
                tone: Tone::Encouraging,
                loss_pct: strategy_loss,
                text: format!("You usually perform well with the {planned_strategy} strategy."),
            }
        };

        Advisory { emotion, strategy }
    }

    fn is_cautionary(&self, loss_pct: Decimal) -> bool {
        loss_pct > self.loss_threshold_pct
    }
}
