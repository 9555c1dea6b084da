#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CUTOFF_ASSERT_LEVEL_DEFINITION: u8 = CUTOFF_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CUTOFF_ASSERT_LEVEL_DEFINITION: u8 = CUTOFF_ASSERT_ADVANCED;

pub const CUTOFF_ASSERT_SIMPLE: u8 = 1;
pub const CUTOFF_ASSERT_MODERATE: u8 = 2;
pub const CUTOFF_ASSERT_ADVANCED: u8 = 3;

macro_rules! cutoff_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CUTOFF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CUTOFF_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

macro_rules! cutoff_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CUTOFF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CUTOFF_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

macro_rules! cutoff_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CUTOFF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CUTOFF_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

pub(crate) use cutoff_assert_advanced;
pub(crate) use cutoff_assert_moderate;
pub(crate) use cutoff_assert_simple;
