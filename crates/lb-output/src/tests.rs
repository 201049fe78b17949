//! Integration tests for lb-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{Quantity, SampleRow, SummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sample(step: u64, x: usize, value: f64) -> SampleRow {
        SampleRow {
            step,
            probe:    "density_row(y=2)".to_string(),
            x,
            y:        2,
            quantity: Quantity::Density,
            value,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("points.csv").exists());
        assert!(dir.path().join("cuts.csv").exists());
        assert!(dir.path().join("summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        for file in ["points.csv", "cuts.csv"] {
            let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
            let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
            assert_eq!(headers, ["step", "probe", "x", "y", "quantity", "value"]);
        }

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "total_mass", "mean_density", "max_speed"]);
    }

    #[test]
    fn csv_cut_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_cuts(&[sample(4, 0, 1.25), sample(4, 1, 0.5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("cuts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "density_row(y=2)");
        assert_eq!(&rows[1][2], "1");
        assert_eq!(&rows[0][4], "density");
        assert_eq!(rows[0][5].parse::<f64>().unwrap(), 1.25);
    }

    #[test]
    fn csv_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&SummaryRow { step: 10, total_mass: 100.0, mean_density: 1.0, max_speed: 0.05 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "10");
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), 0.05);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod probe_tests {
    use lb_core::{MacroFields, Populations};

    use crate::{OutputError, Probe, Quantity};

    fn fields() -> MacroFields {
        let f = Populations::from_equilibrium(10, 12, |x, y| (1.0 + 0.01 * x as f64, [0.001 * y as f64, 0.0]));
        MacroFields::from_populations(&f)
    }

    #[test]
    fn out_of_range_probes_rejected() {
        assert!(Probe::DensityPoint { x: 9, y: 11 }.check(10, 12).is_ok());
        assert!(matches!(
            Probe::VelocityPoint { x: 10, y: 0 }.check(10, 12),
            Err(OutputError::ProbeOutOfBounds { nx: 10, ny: 12, .. })
        ));
        assert!(Probe::DensityRow { y: 12 }.check(10, 12).is_err());
        assert!(Probe::VelocityColumn { x: 10 }.check(10, 12).is_err());
    }

    #[test]
    fn point_probes_sample_one_cell() {
        let f = fields();
        let rows = Probe::DensityPoint { x: 3, y: 4 }.sample(7, &f).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].step, 7);
        assert!((rows[0].value - 1.03).abs() < 1e-12);

        let rows = Probe::VelocityPoint { x: 3, y: 4 }.sample(7, &f).unwrap();
        assert_eq!(rows.iter().map(|r| r.quantity).collect::<Vec<_>>(), [Quantity::VelocityX, Quantity::VelocityY]);
        assert!((rows[0].value - 0.004).abs() < 1e-12);
    }

    #[test]
    fn cut_probes_cover_the_line() {
        let f = fields();
        let row = Probe::DensityRow { y: 2 }.sample(0, &f).unwrap();
        assert_eq!(row.len(), 10);
        assert!(row.iter().enumerate().all(|(x, r)| r.x == x && r.y == 2));

        let column = Probe::VelocityColumn { x: 5 }.sample(0, &f).unwrap();
        assert_eq!(column.len(), 24);
        assert_eq!((column[22].x, column[22].y), (5, 11));
        assert!((column[22].value - 0.011).abs() < 1e-12);
    }

    #[test]
    fn labels_name_the_location() {
        assert_eq!(Probe::DensityPoint { x: 1, y: 2 }.to_string(), "density(1,2)");
        assert_eq!(Probe::VelocityColumn { x: 5 }.to_string(), "velocity_column(x=5)");
    }
}

#[cfg(test)]
mod observer_tests {
    use lb_core::LbConfig;
    use lb_sim::{Decomposition, NoopObserver, Scenario, SimBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{SampleRow, SummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, Probe};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> LbConfig {
        let mut config = LbConfig::new(10, 10, 20, 1.0);
        config.output_interval_steps = 10;
        config
    }

    fn probes() -> Vec<Probe> {
        vec![Probe::DensityPoint { x: 5, y: 5 }, Probe::VelocityColumn { x: 5 }]
    }

    fn count_rows(path: &std::path::Path) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn observer_writes_every_snapshot() {
        let dir = tmp();
        let config = config();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, probes(), &config).unwrap();

        let mut sim = SimBuilder::new(config, Scenario::SlidingLid { wall_velocity: 0.1 }).build().unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // Snapshots at steps 0, 10 and 20.
        assert_eq!(count_rows(&dir.path().join("points.csv")), 3);
        assert_eq!(count_rows(&dir.path().join("cuts.csv")), 3 * 10 * 2);
        assert_eq!(count_rows(&dir.path().join("summaries.csv")), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        for record in rdr.records() {
            let record = record.unwrap();
            let mass: f64 = record[1].parse().unwrap();
            assert!((mass - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn partitioned_run_writes_same_snapshots() {
        let dir = tmp();
        let config = config();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, probes(), &config).unwrap();

        let mut sim = SimBuilder::new(config, Scenario::SlidingLid { wall_velocity: 0.1 })
            .decomposition(Decomposition::new(2))
            .build()
            .unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(count_rows(&dir.path().join("summaries.csv")), 3);
    }

    #[test]
    fn out_of_range_probe_rejected_at_construction() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let result = SimOutputObserver::new(writer, vec![Probe::DensityRow { y: 10 }], &config());
        assert!(matches!(result, Err(OutputError::ProbeOutOfBounds { .. })));
    }

    /// Fails every write and counts the attempts.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
    }

    impl FailingWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.attempts))))
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_points(&mut self, _rows: &[SampleRow]) -> OutputResult<()> {
            self.fail()
        }

        fn write_cuts(&mut self, _rows: &[SampleRow]) -> OutputResult<()> {
            self.fail()
        }

        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            self.fail()
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.fail()
        }
    }

    #[test]
    fn first_error_kept() {
        let config = config();
        let mut obs = SimOutputObserver::new(FailingWriter::default(), probes(), &config).unwrap();
        let mut sim = SimBuilder::new(config, Scenario::CollisionTest { peak: 0.1 }).build().unwrap();
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().attempts > 1);
    }

    #[test]
    fn noop_run_leaves_files_with_headers_only() {
        let dir = tmp();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        let mut sim = SimBuilder::new(LbConfig::new(10, 10, 5, 1.0), Scenario::CollisionTest { peak: 0.1 })
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        writer.finish().unwrap();
        assert_eq!(count_rows(&dir.path().join("points.csv")), 0);
    }
}
