use super::Effect;

/// Ordered collection of effects to apply to a target or carry on a projectile.
///
/// The queue owns its effects. [`EffectQueue::add_effect`] stores a clone, so
/// the caller's instance (often a stored template) is never shared with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectQueue {
    effects: Vec<Effect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `effect`.
    pub fn add_effect(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }

    /// Returns true if the effect's timing mode carries a duration.
    pub fn has_duration(effect: &Effect) -> bool {
        effect.timing.has_duration()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> + '_ {
        self.effects.iter()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

impl<'a> IntoIterator for &'a EffectQueue {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}
