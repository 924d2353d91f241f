use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::{Frame, FrameSet};

/// Everything that determines what the animation looks like and where it ends up.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output: PathBuf,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// Frames per second in the written animation.
    pub fps: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub background: RGBColor,
    /// Color of the text, axes and grid.
    pub foreground: RGBColor,
    pub marker: RGBColor,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Draw the title, axis descriptions and tick labels.
    pub text: bool,
}

impl RenderConfig {
    /// The time each frame is shown, in milliseconds.
    pub fn frame_delay(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        self.x_range.contains(&x) && self.y_range.contains(&y)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("bhs.gif"),
            size: (640, 480),
            x_range: 0.0..24.0,
            y_range: 0.0..24.0,
            fps: 30,
            title: "Barnes Hut Simulation".to_string(),
            x_label: "X Position".to_string(),
            y_label: "Y Position".to_string(),
            background: BLACK,
            foreground: WHITE,
            marker: RED,
            marker_size: 3,
            text: true,
        }
    }
}

/// A sink that turns a sequence of [`Frame`]s into an animation.
///
/// Frames are handed over in the order in which they must appear.
pub trait Animation {
    fn draw_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Flush everything that was drawn.
    fn finish(self) -> Result<()>;
}

/// Draw every frame of `frames` in ascending step order, then finish the animation.
///
/// Returns the number of frames that were drawn.
pub fn animate<A: Animation>(frames: &FrameSet, mut animation: A) -> Result<usize> {
    let mut n = 0;
    for frame in frames {
        animation.draw_frame(frame)?;
        n += 1;
    }
    animation.finish()?;
    Ok(n)
}

/// Write `frames` as an animated gif according to `config`.
///
/// An empty `frames` produces no frames, and so no file is written.
pub fn render_gif(frames: &FrameSet, config: &RenderConfig) -> Result<usize> {
    let n = animate(frames, GifAnimation::new(config))?;
    if n == 0 {
        info!(output = %config.output.display(), "no time steps, nothing written");
    } else {
        info!(nframes = n, output = %config.output.display(), "wrote animation");
    }
    Ok(n)
}

/// An [`Animation`] that writes a gif through the plotters bitmap backend.
///
/// The output file is created when the first frame is drawn.
pub struct GifAnimation<'a> {
    root: Option<DrawingArea<BitMapBackend<'a>, Shift>>,
    config: &'a RenderConfig,
}

impl<'a> GifAnimation<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { root: None, config }
    }

    fn open(config: &'a RenderConfig) -> Result<DrawingArea<BitMapBackend<'a>, Shift>> {
        let root = BitMapBackend::gif(&config.output, config.size, config.frame_delay())
            .map_err(Error::render)?
            .into_drawing_area();
        Ok(root)
    }
}

impl Animation for GifAnimation<'_> {
    fn draw_frame(&mut self, frame: &Frame) -> Result<()> {
        let cfg = self.config;
        let fg = cfg.foreground;
        let root = match &mut self.root {
            Some(root) => root,
            slot => slot.insert(Self::open(cfg)?),
        };

        root.fill(&cfg.background).map_err(Error::render)?;

        let mut builder = ChartBuilder::on(&*root);
        builder.margin(15);
        if cfg.text {
            builder
                .caption(&cfg.title, ("sans-serif", 22).into_font().color(&fg))
                .x_label_area_size(40)
                .y_label_area_size(45);
        }
        let mut chart = builder
            .build_cartesian_2d(cfg.x_range.clone(), cfg.y_range.clone())
            .map_err(Error::render)?;

        let mut mesh = chart.configure_mesh();
        mesh.axis_style(fg)
            .bold_line_style(fg.mix(0.5))
            .light_line_style(TRANSPARENT);
        if cfg.text {
            mesh.x_desc(cfg.x_label.as_str())
                .y_desc(cfg.y_label.as_str())
                .axis_desc_style(("sans-serif", 16).into_font().color(&fg))
                .label_style(("sans-serif", 12).into_font().color(&fg));
        }
        mesh.draw().map_err(Error::render)?;

        chart
            .draw_series(
                frame
                    .coords()
                    .map(|c| Circle::new(c, cfg.marker_size, cfg.marker.filled())),
            )
            .map_err(Error::render)?;

        let outside = frame.coords().filter(|&c| !cfg.contains(c)).count();
        debug!(
            step = frame.step,
            npoints = frame.natoms(),
            outside,
            "drew frame"
        );

        // Each present appends one frame to the gif.
        root.present().map_err(Error::render)
    }

    fn finish(self) -> Result<()> {
        // The gif trailer is written when the backend is dropped.
        drop(self.root);
        Ok(())
    }
}
