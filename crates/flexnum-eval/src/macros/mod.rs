/// Expands to a `caps()` implementation returning the listed [`FnCaps`] flags.
///
/// [`FnCaps`]: crate::function::FnCaps
#[macro_export]
macro_rules! func_caps {
    ( $($cap:ident),+ $(,)? ) => {
        fn caps(&self) -> $crate::function::FnCaps {
            $( $crate::function::FnCaps::$cap )|+
        }
    };
}

/// Registers each unit-struct builtin in the global function registry.
#[macro_export]
macro_rules! register_functions {
    ( $($fn:path),+ $(,)? ) => {{
        $(
            $crate::function_registry::register(::std::sync::Arc::new($fn));
        )+
    }};
}
