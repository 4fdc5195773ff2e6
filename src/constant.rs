// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Default width of the downscaled display frame in pixels.
pub const DISPLAY_WIDTH: u32 = 1200;

/// Default height of the downscaled display frame in pixels.
pub const DISPLAY_HEIGHT: u32 = 675;

/// Radius of a point marker in display pixels (also its hit-test radius).
pub const POINT_RADIUS: i32 = 6;

/// Fill colour of the first point marker (0RGB, as used by the framebuffer).
pub const POINT_COLOR_1: u32 = 0x00FF_0000;

/// Fill colour of the second point marker.
pub const POINT_COLOR_2: u32 = 0x0000_00FF;

/// Outline colour of both point markers.
pub const POINT_OUTLINE: u32 = 0x0000_0000;

/// Outline colour of the selection rectangle.
pub const RECT_COLOR: u32 = 0x0000_8000;

/// Outline width of the selection rectangle.
pub const RECT_WIDTH: i32 = 2;

/// Default magnifier radius around the point, in source pixels.
pub const ZOOM_RADIUS: u32 = 30;

/// Default magnifier upscale factor.
pub const ZOOM_SCALE: u32 = 3;

/// Radius of the marker drawn at the magnifier centre.
pub const ZOOM_MARKER_RADIUS: i32 = 2;

/// Crosshair colour inside the magnifier.
pub const ZOOM_CROSSHAIR: [u8; 4] = [255, 255, 255, 255];

/// Centre marker colour inside the magnifier.
pub const ZOOM_MARKER: [u8; 4] = [255, 0, 0, 255];

/// Border drawn around the magnifier overlay.
pub const ZOOM_BORDER: u32 = 0x0033_3333;

/// Horizontal distance between the pointer and the magnifier.
pub const ZOOM_OFFSET: i32 = 20;

/// Text colour of the coordinate caption under the magnifier.
pub const CAPTION_COLOR: u32 = 0x00FF_FFFF;

/// Padding around the caption text; the strip uses `ZOOM_BORDER` as background.
pub const CAPTION_PADDING: i32 = 3;

/// Date format used in export file names (DD.MM.YY).
pub const EXPORT_DATE_FORMAT: &str = "%d.%m.%y";

/// Directory name used below the pictures directory.
pub const APP_DIR: &str = "regionpick";

/// Export sub-directory name.
pub const EXPORT_DIR: &str = "export";

/// Default delay before capturing, giving the target window time to settle.
pub const CAPTURE_DELAY_MS: u64 = 300;

/// Window icon looked up next to the executable. Optional.
pub const ICON_FILE: &str = "icon.png";
