//! Export helpers for CSV frame tracks and JSON session summaries.

pub mod track {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "elapsed_s,body,pos_x,pos_y,pos_z,rotation_rad,cam_x,cam_y,cam_z,look_x,look_y,look_z,selected,transitioning";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard frame-track CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted once per body per sampled frame.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub elapsed_s: f64,
        pub body: &'a str,
        pub position: [f64; 3],
        pub rotation_rad: f64,
        pub camera_position: [f64; 3],
        pub camera_look_at: [f64; 3],
        pub selected: bool,
        pub transitioning: bool,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{},{}",
                self.elapsed_s,
                self.body,
                self.position[0],
                self.position[1],
                self.position[2],
                self.rotation_rad,
                self.camera_position[0],
                self.camera_position[1],
                self.camera_position[2],
                self.camera_look_at[0],
                self.camera_look_at[1],
                self.camera_look_at[2],
                if self.selected { "true" } else { "false" },
                if self.transitioning { "true" } else { "false" },
            )
        }
    }
}

pub mod summary {
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use chrono::Utc;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// One selection change recorded during a session.
    #[derive(Debug, Clone, Serialize)]
    pub struct SelectionRecord {
        pub at_s: f64,
        /// Selected body name; `None` marks a reset to the overview.
        pub body: Option<String>,
    }

    /// Final camera pose recorded at session end.
    #[derive(Debug, Clone, Serialize)]
    pub struct CameraRecord {
        pub position: [f64; 3],
        pub look_at: [f64; 3],
    }

    /// Envelope of a recorded playback session.
    #[derive(Debug, Serialize)]
    pub struct SessionSummary {
        pub generated_at: String,
        pub catalog_bodies: usize,
        pub frames: usize,
        pub simulated_seconds: f64,
        pub selections: Vec<SelectionRecord>,
        pub final_camera: CameraRecord,
    }

    impl SessionSummary {
        /// Stamp a summary with the current wall-clock time.
        pub fn new(
            catalog_bodies: usize,
            frames: usize,
            simulated_seconds: f64,
            selections: Vec<SelectionRecord>,
            final_camera: CameraRecord,
        ) -> Self {
            Self {
                generated_at: Utc::now().to_rfc3339(),
                catalog_bodies,
                frames,
                simulated_seconds,
                selections,
                final_camera,
            }
        }
    }

    /// Write the pretty-printed JSON sidecar for a session.
    pub fn write_summary(path: &Path, summary: &SessionSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
