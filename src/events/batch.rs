//! Per-step activation throttling.
//!
//! Hosts that cap how many events they dispatch per step collect the
//! step's activations in an [`ActivationBatch`] and shed the excess.
//! Critical activations are never shed, even if they alone exceed the
//! budget.

use super::activation::Activation;

/// Activations collected during one evaluation step.
#[derive(Clone, Debug, Default)]
pub struct ActivationBatch<'a> {
    activations: Vec<Activation<'a>>,
}

impl<'a> ActivationBatch<'a> {
    pub fn new() -> Self {
        Self {
            activations: Vec::new(),
        }
    }

    pub fn push(&mut self, activation: Activation<'a>) {
        self.activations.push(activation);
    }

    pub fn extend(&mut self, activations: impl IntoIterator<Item = Activation<'a>>) {
        self.activations.extend(activations);
    }

    /// Shed non-critical activations until at most `budget` remain, or
    /// only critical ones are left. Later activations go first; the
    /// survivors keep their order. Returns how many were shed.
    pub fn throttle(&mut self, budget: usize) -> usize {
        let critical = self.activations.iter().filter(|a| a.is_critical()).count();
        let mut slots = budget.saturating_sub(critical);

        let before = self.activations.len();
        self.activations.retain(|a| {
            if a.is_critical() {
                return true;
            }
            if slots > 0 {
                slots -= 1;
                return true;
            }
            false
        });

        let shed = before - self.activations.len();
        if shed > 0 {
            log::debug!(
                "shed {} non-critical activations (budget {}, critical {})",
                shed,
                budget,
                critical
            );
        }
        shed
    }

    #[must_use]
    pub fn activations(&self) -> &[Activation<'a>] {
        &self.activations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activation<'a>> {
        self.activations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    pub fn into_vec(self) -> Vec<Activation<'a>> {
        self.activations
    }
}

impl<'a> FromIterator<Activation<'a>> for ActivationBatch<'a> {
    fn from_iter<I: IntoIterator<Item = Activation<'a>>>(iter: I) -> Self {
        Self {
            activations: iter.into_iter().collect(),
        }
    }
}
