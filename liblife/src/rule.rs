/// Birth/survival rule as neighbor-count sets. The default is Conway's
/// B3/S23; nothing else is ever wired up by the client, but keeping the
/// rule as data keeps the tick logic table-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
