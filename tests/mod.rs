mod history_flow;
mod export_formats;

use intellicode::traits::random_source::RandomSource;

/// Replays a fixed list of values, clamped into the requested range.
pub struct ScriptedRandom {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, position: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values.get(self.position).copied().unwrap_or(low);
        self.position += 1;
        value.clamp(low, high)
    }
}
