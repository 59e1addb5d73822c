/// Monotonic sequence for in-flight location lookups. Each request is
/// issued a token; a response is applied only while its token is still
/// the latest, so a slow early response cannot overwrite the result of
/// a later interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new request. Every earlier token goes stale.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Invalidates whatever is in flight without starting a new request,
    /// e.g. when the visitor clears the location field.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Whether a response carrying `token` belongs to the latest request.
    pub fn accepts(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_issued_token_is_accepted() {
        let mut seq = RequestSequence::new();
        let token = seq.issue();
        assert!(seq.accepts(token));
    }

    #[test]
    fn an_older_token_never_overwrites_a_newer_request() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        // Out-of-order completion: the first response arrives last.
        assert!(seq.accepts(second));
        assert!(!seq.accepts(first));
    }

    #[test]
    fn invalidation_drops_the_in_flight_request() {
        // Clearing the query must discard the pending lookup even though
        // no replacement request is issued.
        let mut seq = RequestSequence::new();
        let in_flight = seq.issue();
        seq.invalidate();
        assert!(!seq.accepts(in_flight));
    }

    #[test]
    fn a_request_issued_after_invalidation_is_accepted() {
        let mut seq = RequestSequence::new();
        let stale = seq.issue();
        seq.invalidate();
        let fresh = seq.issue();
        assert!(seq.accepts(fresh));
        assert!(!seq.accepts(stale));
    }

    #[test]
    fn issued_tokens_are_strictly_increasing() {
        let mut seq = RequestSequence::new();
        let a = seq.issue();
        let b = seq.issue();
        let c = seq.issue();
        assert!(a < b && b < c);
    }
}
