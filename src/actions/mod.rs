pub mod tracker;

pub mod ids {
    use crate::PLUGIN_ID;

    pub const TRACKER: &str = const_format::concatcp!(PLUGIN_ID, ".tracker");
}
