#[macro_export]
#[doc(hidden)]
macro_rules! native_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Text, "text", store = String, class = Opaque, bits = 0),
            (Bytes, "bytes", store = Binary, class = Opaque, bits = 0),
            (Bool, "bool", store = Boolean, class = Opaque, bits = 1),
            (Int8, "i8", store = Integer, class = Signed, bits = 8),
            (Int16, "i16", store = Integer, class = Signed, bits = 16),
            (Int32, "i32", store = Integer, class = Signed, bits = 32),
            (Int64, "i64", store = Integer, class = Signed, bits = 64),
            (Isize, "isize", store = Integer, class = Signed, bits = 64),
            (Uint8, "u8", store = Integer, class = Unsigned, bits = 8),
            (Uint16, "u16", store = Integer, class = Unsigned, bits = 16),
            (Uint32, "u32", store = Integer, class = Unsigned, bits = 32),
            (Uint64, "u64", store = Integer, class = Unsigned, bits = 64),
            (Usize, "usize", store = Integer, class = Unsigned, bits = 64),
            (Float32, "f32", store = Double, class = Float, bits = 32),
            (Float64, "f64", store = Double, class = Float, bits = 64),
            (Timestamp, "timestamp", store = String, class = Opaque, bits = 0),
        }
    };
}

macro_rules! native_kind_registry {
    ($macro:ident) => {
        $crate::native_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::native_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($native:ident, $label:literal, store = $store:ident, class = $class:ident, bits = $bits:literal) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::NativeKind::$native => $crate::NativeMetadata {
                    label: $label,
                    store: $crate::StoreKind::$store,
                    class: $crate::NumericClass::$class,
                    bits: $bits,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($native:ident, $label:literal, store = $store:ident, class = $class:ident, bits = $bits:literal) ),* $(,)? ) => {
        [ $( $crate::NativeKind::$native ),* ]
    };
}
