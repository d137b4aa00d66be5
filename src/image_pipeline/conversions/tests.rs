#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use crate::image_pipeline::codec::{PngRasterReader, PngRasterWriter, RasterReader, RasterWriter};
    use crate::image_pipeline::common::error::{Result, TrimError};
    use crate::image_pipeline::config::TrimConfig;
    use crate::image_pipeline::conversions::TrimPipeline;
    use crate::image_pipeline::raster::{Pixel, Raster, RasterView};

    const BACKGROUND: Pixel = Pixel::opaque(12, 12, 12);
    const SUBJECT: Pixel = Pixel::opaque(230, 210, 190);

    /// Square subject with a one-pixel notch on its top-left corner.
    fn subject_image(size: u32, inset: u32) -> Raster {
        let mut raster = Raster::filled(size, size, BACKGROUND).unwrap();
        for y in inset..size - inset {
            for x in inset..size - inset {
                raster.set_pixel(x, y, SUBJECT);
            }
        }
        raster.set_pixel(inset, inset, BACKGROUND);
        raster
    }

    struct MockReader {
        should_fail: bool,
        mock_data: Option<Raster>,
    }

    impl RasterReader for MockReader {
        fn read_raster(&self, _data: &[u8]) -> Result<Raster> {
            if self.should_fail {
                return Err(TrimError::DecodeError("Mock decode error".to_string()));
            }
            Ok(self.mock_data.clone().unwrap_or_else(|| subject_image(100, 20)))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_data: Arc<Mutex<Vec<Raster>>>,
    }

    impl RasterWriter for MockWriter {
        fn write_raster(&self, image: &Raster, _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(TrimError::EncodeError("Mock encode error".to_string()));
            }
            self.written_data.lock().unwrap().push(image.clone());
            Ok(())
        }
    }

    fn pipeline(
        reader: MockReader,
        writer_fails: bool,
        config: TrimConfig,
    ) -> (TrimPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<Raster>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let writer = MockWriter { should_fail: writer_fails, written_data: written.clone() };
        (TrimPipeline::with_custom(reader, writer, config), written)
    }

    fn encode_png(raster: &Raster) -> Vec<u8> {
        let mut bytes = Vec::new();
        PngRasterWriter.write_raster(raster, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_successful_conversion() {
        let reader = MockReader { should_fail: false, mock_data: None };
        let (pipeline, written) = pipeline(reader, false, TrimConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(result.is_ok());
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!((written[0].width(), written[0].height()), (60, 60));
        assert_eq!(written[0].pixel(0, 0), Pixel::TRANSPARENT);
    }

    #[test]
    fn test_reader_failure() {
        let reader = MockReader { should_fail: true, mock_data: None };
        let (pipeline, written) = pipeline(reader, false, TrimConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), TrimError::DecodeError(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let reader = MockReader { should_fail: false, mock_data: None };
        let (pipeline, _) = pipeline(reader, true, TrimConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), TrimError::EncodeError(_)));
    }

    #[test]
    fn test_no_foreground_produces_no_output() {
        let reader = MockReader {
            should_fail: false,
            mock_data: Some(Raster::filled(10, 10, BACKGROUND).unwrap()),
        };
        let (pipeline, written) = pipeline(reader, false, TrimConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), TrimError::NoForegroundFound));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dimension_validation_failure() {
        let reader = MockReader { should_fail: false, mock_data: None };
        let config = TrimConfig::builder()
            .validate_dimensions(true)
            .max_dimension(Some(50))
            .build();
        let (pipeline, _) = pipeline(reader, false, config);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), TrimError::InvalidDimensions(100, 100)));
    }

    #[test]
    fn test_dimension_validation_disabled() {
        let reader = MockReader { should_fail: false, mock_data: None };
        let config = TrimConfig::builder()
            .validate_dimensions(false)
            .max_dimension(Some(50))
            .build();
        let (pipeline, _) = pipeline(reader, false, config);

        let mut output = Cursor::new(Vec::new());
        assert!(pipeline.convert(b"fake png data", &mut output).is_ok());
    }

    #[test]
    fn test_set_config_disables_straightening() {
        let mut small = Raster::filled(20, 20, BACKGROUND).unwrap();
        for y in 5..15 {
            for x in 5..15 {
                small.set_pixel(x, y, SUBJECT);
            }
        }
        let reader = MockReader { should_fail: false, mock_data: Some(small) };
        let (mut pipeline, written) = pipeline(reader, false, TrimConfig::default());

        let mut output = Cursor::new(Vec::new());
        assert!(matches!(
            pipeline.convert(b"fake", &mut output).unwrap_err(),
            TrimError::DegenerateBand { .. }
        ));

        pipeline.set_config(TrimConfig::builder().straighten_edges(false).build());
        assert!(!pipeline.config().straighten_edges);
        pipeline.convert(b"fake", &mut output).unwrap();
        assert_eq!(written.lock().unwrap()[0].transparent_count(), 0);
    }

    #[test]
    fn test_png_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        std::fs::write(&input, encode_png(&subject_image(80, 10))).unwrap();

        let pipeline = TrimPipeline::new(TrimConfig::default());
        pipeline.convert_file(&input, &output).unwrap();

        let trimmed = PngRasterReader.read_raster(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!((trimmed.width(), trimmed.height()), (60, 60));
        // The notch in the subject's corner was erased.
        assert_eq!(trimmed.pixel(0, 0), Pixel::TRANSPARENT);
        assert_eq!(trimmed.pixel(30, 30), SUBJECT);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = TrimPipeline::new(TrimConfig::default());

        let result = pipeline.convert_file(dir.path().join("missing.png"), dir.path().join("out.png"));

        assert!(matches!(result.unwrap_err(), TrimError::InputReadError(_)));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let blank = dir.path().join("blank.png");
        std::fs::write(&good, encode_png(&subject_image(80, 10))).unwrap();
        std::fs::write(&blank, encode_png(&Raster::filled(16, 16, BACKGROUND).unwrap())).unwrap();

        let jobs: Vec<(PathBuf, PathBuf)> = vec![
            (good.clone(), dir.path().join("good_out.png")),
            (blank, dir.path().join("blank_out.png")),
            (good, dir.path().join("good_again.png")),
        ];

        let pipeline = TrimPipeline::new(TrimConfig::default());
        let results = pipeline.convert_batch(&jobs);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(TrimError::NoForegroundFound)));
        assert!(results[2].is_ok());
        assert!(!dir.path().join("blank_out.png").exists());
        assert_eq!(
            std::fs::read(dir.path().join("good_out.png")).unwrap(),
            std::fs::read(dir.path().join("good_again.png")).unwrap()
        );
    }
}
