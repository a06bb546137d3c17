//! Subdivision recipes: which refinement passes run, in which order.
//!
//! A recipe is an ordered list of `{strategy, rounds}` steps. The short text
//! form spells one letter per round, `M` for midpoint and `C` for crossing, so
//! `"MMC"` is two midpoint rounds followed by one crossing round.

use std::fmt;
use std::str::FromStr;

use crate::cfg::MAX_ROUNDS;
use crate::error::RectError;

/// One refinement pass over both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Insert the midpoint between every pair of adjacent lines.
    Midpoint,
    /// Add the points where polygon edges cross existing lines.
    Crossing,
}

impl Strategy {
    pub fn letter(self) -> char {
        match self {
            Strategy::Midpoint => 'M',
            Strategy::Crossing => 'C',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Strategy::Midpoint),
            'C' => Some(Strategy::Crossing),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubdivisionStep {
    pub strategy: Strategy,
    pub rounds: u32,
}

/// Ordered refinement recipe. The default is two crossing rounds (`"CC"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubdivisionCfg {
    pub steps: Vec<SubdivisionStep>,
}

impl Default for SubdivisionCfg {
    fn default() -> Self {
        Self::repeat(Strategy::Crossing, 2)
    }
}

impl SubdivisionCfg {
    /// No refinement: grid lines are the vertex coordinates only.
    pub fn none() -> Self {
        Self { steps: Vec::new() }
    }

    /// `rounds` passes of a single strategy.
    pub fn repeat(strategy: Strategy, rounds: u32) -> Self {
        Self::none().then(strategy, rounds)
    }

    /// Append `rounds` passes of `strategy`, merging with a trailing step of
    /// the same strategy.
    pub fn then(mut self, strategy: Strategy, rounds: u32) -> Self {
        if rounds == 0 {
            return self;
        }
        match self.steps.last_mut() {
            Some(last) if last.strategy == strategy => last.rounds += rounds,
            _ => self.steps.push(SubdivisionStep { strategy, rounds }),
        }
        self
    }

    pub fn total_rounds(&self) -> u32 {
        self.steps.iter().map(|s| s.rounds).sum()
    }

    /// Flattened round sequence, one strategy per pass.
    pub fn rounds(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.steps
            .iter()
            .flat_map(|s| std::iter::repeat(s.strategy).take(s.rounds as usize))
    }

    pub fn validate(&self) -> Result<(), RectError> {
        let total = self.total_rounds();
        if total > MAX_ROUNDS {
            return Err(RectError::config(format!(
                "{total} rounds requested, at most {MAX_ROUNDS} allowed"
            )));
        }
        Ok(())
    }

    /// Keep only the first `MAX_ROUNDS` rounds.
    pub fn truncated(&self) -> Self {
        self.rounds()
            .take(MAX_ROUNDS as usize)
            .fold(Self::none(), |cfg, s| cfg.then(s, 1))
    }
}

impl fmt::Display for SubdivisionCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("none");
        }
        for s in self.rounds() {
            write!(f, "{}", s.letter())?;
        }
        Ok(())
    }
}

impl FromStr for SubdivisionCfg {
    type Err = RectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }
        let mut cfg = Self::none();
        for c in s.chars() {
            let strategy = Strategy::from_letter(c).ok_or_else(|| {
                RectError::config(format!("unknown subdivision letter {c:?} in {s:?}"))
            })?;
            cfg = cfg.then(strategy, 1);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
