pub type CmdResult<T> = stampr::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Print a JSON envelope instead of the completion message.
    pub json: bool,
}

pub mod rename;
