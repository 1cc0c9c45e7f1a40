/// Hands out increasing ids to searches so only the newest one may render.
#[derive(Debug, Default)]
pub struct RequestGenerationCounter {
    latest: u64,
}

impl RequestGenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
