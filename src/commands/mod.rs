pub type CmdResult<T> = opacity_fix::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Emit the JSON response envelope instead of the console report.
    pub json: bool,
}

pub mod migrate;
