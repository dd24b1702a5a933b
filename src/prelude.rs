pub(crate) type Result<T, E = crate::errors::Error> = core::result::Result<T, E>;
