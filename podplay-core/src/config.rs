/// Initial settings for a [`Player`](crate::player::Player)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Start with looping enabled
    pub looping: bool,
    /// Start with shuffling enabled
    pub shuffling: bool,
    /// Fixed seed for the shuffle picker, OS entropy when unset
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn shuffling(mut self, shuffling: bool) -> Self {
        self.shuffling = shuffling;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = PlayerConfig::new().looping(true).seed(42);
        assert!(config.looping);
        assert!(!config.shuffling);
        assert_eq!(config.seed, Some(42));
    }
}
