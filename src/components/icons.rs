//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleAlert as Error, LuCircleCheck as Success, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuChevronUp as ChevronUp, LuFile as File,
        LuFileImage as FileImage, LuFileText as FileText, LuInfo as Info, LuMinus as Minus,
        LuMoon as Moon, LuPlus as Plus, LuRotateCcw as Retry, LuSun as Sun,
        LuTrash2 as Trash, LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Retry, BsCheckCircleFill as Success,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsChevronUp as ChevronUp,
        BsDashLg as Minus, BsExclamationTriangleFill as Warning, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText,
        BsInfoCircleFill as Info, BsMoonStarsFill as Moon, BsPlusLg as Plus,
        BsSunFill as Sun, BsTrash as Trash, BsXCircleFill as Error, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_UP, ChevronUp);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CLOSE, Close);
themed_icon!(PLUS, Plus);
themed_icon!(MINUS, Minus);
themed_icon!(TRASH, Trash);
themed_icon!(RETRY, Retry);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(WARNING, Warning);
themed_icon!(ERROR, Error);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
