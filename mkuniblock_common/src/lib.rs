pub mod character_set;
pub mod paths;

pub const FILTER_SPEC: &str = "debug,mkuniblock=debug,mkuniblock_common=debug";
