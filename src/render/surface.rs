/// What the frame loop does after `get_current_texture` fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceAction {
    /// Configure the surface again and draw next frame.
    Reconfigure,
    /// Transient; try again next frame.
    Skip,
    /// Not recoverable here; log it.
    Report,
}

pub fn on_surface_error(err: &wgpu::SurfaceError) -> SurfaceAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceAction::Skip,
        _ => SurfaceAction::Report,
    }
}
