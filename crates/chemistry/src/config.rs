/// Smallest accepted species or state count.
pub const MIN_COUNT: u16 = 1;
/// Largest accepted species or state count. Atoms index species and states
/// with a `u8`, so 256 distinct values is the ceiling.
pub const MAX_COUNT: u16 = 256;

pub const DEFAULT_SPECIES_COUNT: u16 = 1;
pub const DEFAULT_STATE_COUNT: u16 = 2;

pub const SPECIES_KEY: &str = "num_species";
pub const STATES_KEY: &str = "num_states";
pub const PATTERN_KEY: &str = "chempattern";

pub const SPECIES_LABEL: &str = "Number of species";
pub const STATES_LABEL: &str = "Number of states";
pub const PATTERN_LABEL: &str = "Chemistry pattern";

pub const SPECIES_HELP: &str =
    "Number of atom species present in the world (between 1 and 256)";
pub const STATES_HELP: &str = "Number of states an atom can take (between 1 and 256)";
pub const PATTERN_HELP: &str =
    "Write a chemistry pattern here to use for generating a chemistry.cfg";
