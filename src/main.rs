use std::sync::Arc;

use log::{info, warn};

use multiview::{CameraControlSettings, MultiView, ViewMode, Viewport};

/// Frame step of the refresh loop, in seconds.
const FRAME_STEP: f32 = 0.016;

/// Enough frames for any default transition to finish several times over.
const MAX_FRAMES: usize = 600;

fn settle(rig: &mut MultiView) -> usize {
    for frame in 0..MAX_FRAMES {
        if rig.settled() {
            return frame;
        }
        rig.update(FRAME_STEP);
    }
    warn!("cameras still moving after {MAX_FRAMES} frames");
    MAX_FRAMES
}

fn log_frames(rig: &mut MultiView) {
    for (viewport, rect) in rig.layout() {
        let frame = rig.frame(viewport);
        info!(
            "{viewport:?} {}x{} at ({}, {}): {} camera at {:.3}, grid {:?}",
            rect.width, rect.height, rect.x, rect.y, frame.view, frame.position, frame.grid_plane
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rig = MultiView::new(Arc::new(CameraControlSettings::default()));
    rig.resize(800, 800);
    rig.initialize();

    let frames = settle(&mut rig);
    info!("presets settled after {frames} frames");
    log_frames(&mut rig);

    let name = rig.view_for(Viewport::D);
    rig.maximize(name);
    debug_assert_eq!(rig.mode(), ViewMode::SingleView);
    info!("maximized {name}");
    log_frames(&mut rig);

    rig.restore_layout();
    info!("restored quadrant layout");
    log_frames(&mut rig);
}
