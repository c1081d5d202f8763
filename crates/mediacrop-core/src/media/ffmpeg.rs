//! FFmpeg argument planning for boomerang clips.
//!
//! The filter graph crops (when a crop is set), scales, then plays the clip
//! forward followed by its reverse:
//!
//! ```text
//! [0:v]crop=w:h:x:y,scale=...,split[v1][v2];[v2]reverse[r];[v1][r]concat=n=2:v=1:a=0
//! ```
//!
//! Only the argument vector is produced here; running ffmpeg is up to the
//! [`MediaProcessor`](super::MediaProcessor) implementation.

use std::path::{Path, PathBuf};

use super::request::{BoomerangRequest, PixelCrop};
use super::time::format_time;

/// Encoder settings for the target device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeProfile {
    /// 1920px long edge, H.264
    #[default]
    Standard,
    /// 720px long edge, MPEG-4 Part 2 for older decoders
    Legacy,
}

impl EncodeProfile {
    fn long_edge(self) -> u32 {
        match self {
            EncodeProfile::Standard => 1920,
            EncodeProfile::Legacy => 720,
        }
    }

    fn divisible_by(self) -> u32 {
        match self {
            EncodeProfile::Standard => 16,
            EncodeProfile::Legacy => 2,
        }
    }

    fn codec(self) -> &'static str {
        match self {
            EncodeProfile::Standard => "h264",
            EncodeProfile::Legacy => "mpeg4",
        }
    }

    /// Scale filter fitting the long edge, keeping even dimensions.
    pub fn scale_filter(self) -> String {
        let edge = self.long_edge();
        format!(
            "scale='if(gt(iw,ih),{edge},-2):if(gt(iw,ih),-2,{edge}):force_original_aspect_ratio=decrease:force_divisible_by={}'",
            self.divisible_by()
        )
    }
}

/// Crop filter prefix, empty for the full frame.
pub fn crop_filter(crop: Option<&PixelCrop>) -> String {
    match crop {
        Some(c) => format!("crop={}:{}:{}:{},", c.width, c.height, c.x, c.y),
        None => String::new(),
    }
}

/// Builder for a boomerang encode.
#[derive(Debug, Clone)]
pub struct BoomerangCommand {
    request: BoomerangRequest,
    output: PathBuf,
    profile: EncodeProfile,
    frame_rate: u32,
    bitrate_kbps: u32,
}

impl BoomerangCommand {
    pub fn new(request: BoomerangRequest, output: impl AsRef<Path>) -> Self {
        Self {
            request,
            output: output.as_ref().to_path_buf(),
            profile: EncodeProfile::default(),
            frame_rate: 30,
            bitrate_kbps: 4000,
        }
    }

    pub fn profile(mut self, profile: EncodeProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    pub fn bitrate_kbps(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = kbps;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The complete `-filter_complex` graph.
    pub fn filter_graph(&self) -> String {
        format!(
            "[0:v]{}{},split[v1][v2];[v2]reverse[r];[v1][r]concat=n=2:v=1:a=0",
            crop_filter(self.request.crop.as_ref()),
            self.profile.scale_filter()
        )
    }

    /// Build the command arguments (without the `ffmpeg` program name).
    pub fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-y".into(),
            "-ss".into(),
            self.request.start_time.clone(),
            "-t".into(),
            format_time(self.request.duration_secs),
            "-i".into(),
            self.request.source.to_string_lossy().into_owned(),
            "-filter_complex".into(),
            self.filter_graph(),
            "-r".into(),
            self.frame_rate.to_string(),
            "-g".into(),
            self.frame_rate.to_string(),
            "-an".into(),
            "-c:v".into(),
            self.profile.codec().into(),
        ];

        if self.profile == EncodeProfile::Legacy {
            args.push("-vtag".into());
            args.push("mp4v".into());
        }

        let bitrate = format!("{}k", self.bitrate_kbps);
        let bufsize = format!("{}k", self.bitrate_kbps * 2);
        args.extend([
            "-pix_fmt".into(),
            "yuv420p".into(),
            "-b:v".into(),
            bitrate.clone(),
            "-maxrate".into(),
            bitrate,
            "-bufsize".into(),
            bufsize,
            "-f".into(),
            "mp4".into(),
            self.output.to_string_lossy().into_owned(),
        ]);

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(crop: Option<PixelCrop>) -> BoomerangRequest {
        BoomerangRequest {
            source: PathBuf::from("/videos/in.mov"),
            start_time: "00:00:04.500".into(),
            crop,
            duration_secs: 2.0,
        }
    }

    fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    #[test]
    fn test_crop_filter() {
        let crop = PixelCrop::new(636, 0, 648, 1080);
        assert_eq!(crop_filter(Some(&crop)), "crop=648:1080:636:0,");
        assert_eq!(crop_filter(None), "");
    }

    #[test]
    fn test_filter_graph_with_crop() {
        let cmd = BoomerangCommand::new(request(Some(PixelCrop::new(1, 2, 3, 4))), "/out.mp4");
        let graph = cmd.filter_graph();
        assert!(graph.starts_with("[0:v]crop=3:4:1:2,scale="));
        assert!(graph.ends_with("split[v1][v2];[v2]reverse[r];[v1][r]concat=n=2:v=1:a=0"));
    }

    #[test]
    fn test_filter_graph_full_frame() {
        let cmd = BoomerangCommand::new(request(None), "/out.mp4");
        assert!(cmd.filter_graph().starts_with("[0:v]scale="));
    }

    #[test]
    fn test_standard_args() {
        let args = BoomerangCommand::new(request(None), "/out.mp4").build_args();

        assert_eq!(args.first().map(String::as_str), Some("-y"));
        assert_eq!(value_after(&args, "-ss"), Some("00:00:04.500"));
        assert_eq!(value_after(&args, "-t"), Some("00:00:02.000"));
        assert_eq!(value_after(&args, "-i"), Some("/videos/in.mov"));
        assert_eq!(value_after(&args, "-c:v"), Some("h264"));
        assert_eq!(value_after(&args, "-r"), Some("30"));
        assert_eq!(value_after(&args, "-bufsize"), Some("8000k"));
        assert!(!args.iter().any(|a| a == "-vtag"));
        assert_eq!(args.last().map(String::as_str), Some("/out.mp4"));
    }

    #[test]
    fn test_legacy_profile() {
        let cmd = BoomerangCommand::new(request(None), "/out.mp4").profile(EncodeProfile::Legacy);
        let args = cmd.build_args();

        assert_eq!(value_after(&args, "-c:v"), Some("mpeg4"));
        assert_eq!(value_after(&args, "-vtag"), Some("mp4v"));
        assert!(cmd.filter_graph().contains("720"));
        assert!(cmd.filter_graph().contains("force_divisible_by=2"));
    }

    #[test]
    fn test_custom_rate_and_bitrate() {
        let args = BoomerangCommand::new(request(None), "/out.mp4")
            .frame_rate(24)
            .bitrate_kbps(2500)
            .build_args();

        assert_eq!(value_after(&args, "-g"), Some("24"));
        assert_eq!(value_after(&args, "-maxrate"), Some("2500k"));
        assert_eq!(value_after(&args, "-bufsize"), Some("5000k"));
    }
}
