use serde::{Deserialize, Serialize};

/// Waiting times of a run, one per customer, in the order servers were granted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitingTimeLog {
    waits: Vec<f64>,
}

impl WaitingTimeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, wait: f64) {
        self.waits.push(wait);
    }

    pub fn len(&self) -> usize {
        self.waits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waits.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.waits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.waits.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.waits
    }
}

impl<'a> IntoIterator for &'a WaitingTimeLog {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<WaitingTimeLog> for Vec<f64> {
    fn from(log: WaitingTimeLog) -> Self {
        log.into_vec()
    }
}
