pub type Score = i32;

// running-best sentinels; real scores never leave the +-10 (+- depth) range
pub(crate) const SCORE_NEG_INF: Score = -1000;
pub(crate) const SCORE_POS_INF: Score = 1000;

pub const SCORE_WIN: Score = 10;
pub const SCORE_LOSS: Score = -10;

/* POLICY PARAMETERS */

// knobs for the difficulty policy that are product decisions rather than
// engine semantics; defaults follow the reference behavior
#[derive(Copy, Clone, Debug)]
pub struct PolicyConfig {
    // chance that a medium-level turn runs the full search instead of
    // playing a random cell
    pub medium_search_chance: f64,
    // if the first move of the game falls to a computer player, play it
    // randomly no matter the difficulty
    pub force_easy_first_move: bool,
}

impl Default for PolicyConfig {
    fn default() -> PolicyConfig {
        PolicyConfig {
            medium_search_chance: 0.7,
            force_easy_first_move: true,
        }
    }
}
