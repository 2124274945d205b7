//! Fixed output descriptors for the launch-screen imagesets.

/// Default asset catalog the images are written into.
pub const DEFAULT_CATALOG: &str =
    "/Users/wlprinsloo/Documents/Projects/Tower-game/SpaceSalvagers/Resources/Assets.xcassets";

/// Imageset directory for backgrounds.
pub const BACKGROUND_IMAGESET: &str = "LaunchBackground.imageset";

/// Imageset directory for logos.
pub const LOGO_IMAGESET: &str = "LaunchLogo.imageset";

/// One background variant to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundAsset {
    pub width: u32,
    pub height: u32,
    pub filename: &'static str,
    pub scale: u8,
}

/// One logo variant to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoAsset {
    pub size: u32,
    pub filename: &'static str,
    pub scale: u8,
}

/// Background variants, in generation order.
pub const BACKGROUNDS: [BackgroundAsset; 3] = [
    BackgroundAsset {
        width: 320,
        height: 568,
        filename: "launch-bg@1x.png",
        scale: 1,
    },
    BackgroundAsset {
        width: 750,
        height: 1334,
        filename: "launch-bg@2x.png",
        scale: 2,
    },
    BackgroundAsset {
        width: 1242,
        height: 2208,
        filename: "launch-bg@3x.png",
        scale: 3,
    },
];

/// Logo variants, in generation order.
pub const LOGOS: [LogoAsset; 3] = [
    LogoAsset {
        size: 200,
        filename: "launch-logo@1x.png",
        scale: 1,
    },
    LogoAsset {
        size: 400,
        filename: "launch-logo@2x.png",
        scale: 2,
    },
    LogoAsset {
        size: 600,
        filename: "launch-logo@3x.png",
        scale: 3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames_match_scale() {
        for bg in BACKGROUNDS {
            assert!(bg.filename.ends_with(&format!("@{}x.png", bg.scale)));
        }
        for logo in LOGOS {
            assert!(logo.filename.ends_with(&format!("@{}x.png", logo.scale)));
        }
    }

    #[test]
    fn test_ordered_by_scale() {
        let scales: Vec<u8> = BACKGROUNDS.iter().map(|b| b.scale).collect();
        assert_eq!(scales, vec![1, 2, 3]);
        let sizes: Vec<u32> = LOGOS.iter().map(|l| l.size).collect();
        assert_eq!(sizes, vec![200, 400, 600]);
    }
}
