/// A level-up waiting to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
}

/// One-shot level-up notification
///
/// Raised by the controller after a reward crosses a threshold, displayed by
/// the front end until the player dismisses it. Raising again before a
/// dismissal replaces the pending level with the newer one.
#[derive(Debug, Default, Clone)]
pub struct LevelUpNotice {
    pending: Option<LevelUp>,
}

impl LevelUpNotice {
    pub fn raise(&mut self, new_level: u32) {
        self.pending = Some(LevelUp { new_level });
    }

    pub fn pending(&self) -> Option<LevelUp> {
        self.pending
    }

    pub fn is_showing(&self) -> bool {
        self.pending.is_some()
    }

    /// Clear the notice, returning what was shown
    pub fn dismiss(&mut self) -> Option<LevelUp> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_is_one_shot() {
        let mut notice = LevelUpNotice::default();
        assert!(!notice.is_showing());

        notice.raise(2);
        assert_eq!(notice.pending(), Some(LevelUp { new_level: 2 }));
        assert_eq!(notice.dismiss(), Some(LevelUp { new_level: 2 }));
        assert_eq!(notice.dismiss(), None);
    }

    #[test]
    fn test_raise_replaces_pending() {
        let mut notice = LevelUpNotice::default();
        notice.raise(2);
        notice.raise(3);
        assert_eq!(notice.pending().map(|l| l.new_level), Some(3));
    }
}
