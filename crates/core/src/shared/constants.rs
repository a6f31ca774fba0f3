pub const DEFAULT_INPUT_DIR: &str = "./images";
pub const DEFAULT_OUTPUT_DIR: &str = "./outputImgs";

/// Blended output is always encoded as JPEG, whatever the input formats.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Directory entries starting with this character are not listed.
pub const HIDDEN_FILE_PREFIX: char = '.';
