//! Facade turning crop results into media-processing requests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbImage;
use tracing::{debug, warn};

use super::request::{normalize_source_path, BoomerangRequest, PixelCrop, ThumbnailRequest};
use super::thumbnail::render_thumbnail;
use super::time::{format_time, thumbnail_sample_times};
use super::{MediaProcessingError, MediaProcessor};
use crate::config::EditorConfig;
use crate::CropResult;

/// Editor for one source video.
///
/// Validates parameters, converts the latest [`CropResult`] into a pixel
/// rectangle and forwards the request to the [`MediaProcessor`].
#[derive(Debug)]
pub struct VideoEditor<P> {
    processor: P,
    source: PathBuf,
    duration_secs: f64,
    config: EditorConfig,
}

impl<P: MediaProcessor> VideoEditor<P> {
    /// Create an editor for `source` (a path or `file://` URI).
    pub fn new(
        processor: P,
        source: &str,
        duration_secs: f64,
        config: EditorConfig,
    ) -> Result<Self, MediaProcessingError> {
        config.validate()?;
        let source = normalize_source_path(source);
        if source.as_os_str().is_empty() {
            return Err(MediaProcessingError::InvalidSource(
                "source path is empty".into(),
            ));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(MediaProcessingError::InvalidRequest(format!(
                "duration must be positive, got {duration_secs}"
            )));
        }
        Ok(Self {
            processor,
            source,
            duration_secs,
            config,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Build the boomerang request for a start position and optional crop.
    pub fn boomerang_request(
        &self,
        start_secs: f64,
        crop: Option<&CropResult>,
    ) -> Result<BoomerangRequest, MediaProcessingError> {
        if !start_secs.is_finite() || start_secs < 0.0 || start_secs >= self.duration_secs {
            return Err(MediaProcessingError::InvalidRequest(format!(
                "start {start_secs}s outside 0..{}s",
                self.duration_secs
            )));
        }
        // Never run past the end of the source
        let duration_secs = self
            .config
            .boomerang_duration_secs()
            .min(self.duration_secs - start_secs);

        Ok(BoomerangRequest {
            source: self.source.clone(),
            start_time: format_time(start_secs),
            crop: crop.and_then(PixelCrop::from_result),
            duration_secs,
        })
    }

    /// Produce a boomerang clip starting at `start_secs`.
    pub fn make_boomerang(
        &self,
        start_secs: f64,
        crop: Option<&CropResult>,
    ) -> Result<PathBuf, MediaProcessingError> {
        let request = self.boomerang_request(start_secs, crop)?;
        debug!(
            start = %request.start_time,
            duration = request.duration_secs,
            crop = ?request.crop,
            "creating boomerang"
        );
        self.processor.make_boomerang(&request).inspect_err(|err| {
            warn!(error = %err, "boomerang creation failed");
        })
    }

    /// Build the thumbnail request for an optional crop.
    pub fn thumbnail_request(&self, crop: Option<&CropResult>) -> ThumbnailRequest {
        ThumbnailRequest {
            source: self.source.clone(),
            total_duration_secs: self.duration_secs,
            crop: crop.and_then(PixelCrop::from_result),
            sample_window_secs: self.config.boomerang_duration_secs(),
        }
    }

    /// Produce the thumbnail strip for the whole source.
    pub fn create_thumbnails(
        &self,
        crop: Option<&CropResult>,
    ) -> Result<Vec<PathBuf>, MediaProcessingError> {
        let request = self.thumbnail_request(crop);
        debug!(crop = ?request.crop, "creating thumbnails");
        self.processor.create_thumbnails(&request).inspect_err(|err| {
            warn!(error = %err, "thumbnail creation failed");
        })
    }

    /// Render one strip thumbnail from a decoded frame at the configured width.
    pub fn render_thumbnail(
        &self,
        frame: &RgbImage,
        crop: Option<&CropResult>,
    ) -> Result<RgbImage, MediaProcessingError> {
        let crop = crop.and_then(PixelCrop::from_result);
        render_thumbnail(frame, crop.as_ref(), self.config.thumbnail_width)
    }

    /// Timestamps the thumbnail strip samples, per the editor configuration.
    pub fn thumbnail_times(&self) -> Vec<Duration> {
        thumbnail_sample_times(
            self.duration_secs,
            self.config.thumbnail_interval_ms,
            self.config.thumbnail_lead_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CropArea;
    use std::cell::RefCell;

    /// Processor that records requests and returns canned paths.
    #[derive(Default)]
    struct RecordingProcessor {
        boomerangs: RefCell<Vec<BoomerangRequest>>,
        thumbnails: RefCell<Vec<ThumbnailRequest>>,
        fail: bool,
    }

    impl MediaProcessor for RecordingProcessor {
        fn make_boomerang(
            &self,
            request: &BoomerangRequest,
        ) -> Result<PathBuf, MediaProcessingError> {
            if self.fail {
                return Err(MediaProcessingError::failed_with_logs("exit 1", "codec not found"));
            }
            self.boomerangs.borrow_mut().push(request.clone());
            Ok(PathBuf::from("/out/boomerangVideo.mp4"))
        }

        fn create_thumbnails(
            &self,
            request: &ThumbnailRequest,
        ) -> Result<Vec<PathBuf>, MediaProcessingError> {
            if self.fail {
                return Err(MediaProcessingError::FrameUnavailable { at_ms: 1000 });
            }
            self.thumbnails.borrow_mut().push(request.clone());
            Ok(vec![PathBuf::from("/out/thumbnail_0.jpg")])
        }
    }

    fn crop_result() -> CropResult {
        CropResult {
            cropped_area_pixels: CropArea {
                x: 636.0,
                y: 0.0,
                width: 648.0,
                height: 1080.0,
            },
            ..CropResult::default()
        }
    }

    fn editor(fail: bool) -> VideoEditor<RecordingProcessor> {
        let processor = RecordingProcessor {
            fail,
            ..RecordingProcessor::default()
        };
        VideoEditor::new(processor, "file:///videos/in.mov", 10.0, EditorConfig::default())
            .unwrap()
    }

    #[test]
    fn test_new_normalizes_source() {
        assert_eq!(editor(false).source(), Path::new("/videos/in.mov"));
    }

    #[test]
    fn test_new_rejects_bad_inputs() {
        let config = EditorConfig::default();
        assert!(matches!(
            VideoEditor::new(RecordingProcessor::default(), "", 10.0, config.clone()),
            Err(MediaProcessingError::InvalidSource(_))
        ));
        assert!(matches!(
            VideoEditor::new(RecordingProcessor::default(), "/a.mp4", 0.0, config.clone()),
            Err(MediaProcessingError::InvalidRequest(_))
        ));

        let mut bad = config;
        bad.thumbnail_interval_ms = 0;
        assert!(matches!(
            VideoEditor::new(RecordingProcessor::default(), "/a.mp4", 5.0, bad),
            Err(MediaProcessingError::Config(_))
        ));
    }

    #[test]
    fn test_make_boomerang_passes_crop() {
        let editor = editor(false);
        let path = editor.make_boomerang(4.5, Some(&crop_result())).unwrap();
        assert_eq!(path, PathBuf::from("/out/boomerangVideo.mp4"));

        let requests = editor.processor().boomerangs.borrow();
        assert_eq!(requests[0].start_time, "00:00:04.500");
        assert_eq!(requests[0].crop, Some(PixelCrop::new(636, 0, 648, 1080)));
        assert_eq!(requests[0].duration_secs, 2.0);
    }

    #[test]
    fn test_make_boomerang_without_crop_uses_full_frame() {
        let editor = editor(false);
        editor.make_boomerang(0.0, None).unwrap();
        assert_eq!(editor.processor().boomerangs.borrow()[0].crop, None);
    }

    #[test]
    fn test_boomerang_truncated_at_end() {
        let request = editor(false).boomerang_request(9.25, None).unwrap();
        assert!((request.duration_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_boomerang_start_out_of_range() {
        let editor = editor(false);
        assert!(editor.boomerang_request(-1.0, None).is_err());
        assert!(editor.boomerang_request(10.0, None).is_err());
        assert!(editor.boomerang_request(f64::NAN, None).is_err());
    }

    #[test]
    fn test_processor_failure_surfaces() {
        let err = editor(true).make_boomerang(1.0, None).unwrap_err();
        assert!(matches!(err, MediaProcessingError::Failed { .. }));

        let err = editor(true).create_thumbnails(None).unwrap_err();
        assert!(matches!(err, MediaProcessingError::FrameUnavailable { at_ms: 1000 }));
    }

    #[test]
    fn test_create_thumbnails_request() {
        let editor = editor(false);
        let paths = editor.create_thumbnails(Some(&crop_result())).unwrap();
        assert_eq!(paths.len(), 1);

        let requests = editor.processor().thumbnails.borrow();
        assert_eq!(requests[0].total_duration_secs, 10.0);
        assert_eq!(requests[0].sample_window_secs, 2.0);
        assert!(requests[0].crop.is_some());
    }

    #[test]
    fn test_render_thumbnail_uses_configured_width() {
        let frame = RgbImage::new(1920, 1080);

        let full = editor(false).render_thumbnail(&frame, None).unwrap();
        assert_eq!(full.dimensions(), (80, 45));

        let cropped = editor(false)
            .render_thumbnail(&frame, Some(&crop_result()))
            .unwrap();
        assert_eq!(cropped.dimensions(), (80, 133));
    }

    #[test]
    fn test_render_thumbnail_width_override() {
        let config = EditorConfig {
            thumbnail_width: 40,
            ..EditorConfig::default()
        };
        let editor =
            VideoEditor::new(RecordingProcessor::default(), "/a.mp4", 5.0, config).unwrap();

        let thumb = editor.render_thumbnail(&RgbImage::new(320, 180), None).unwrap();
        assert_eq!(thumb.dimensions(), (40, 23));
    }

    #[test]
    fn test_thumbnail_times_follow_config() {
        let times = editor(false).thumbnail_times();
        // 0, 1.5, ..., 9.0 seconds
        assert_eq!(times.len(), 7);
        assert_eq!(times[1], Duration::from_millis(1000));
    }
}
