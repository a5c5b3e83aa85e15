use hover_text::{EffectConfig, Event, FrameOutput, HoverTextEffect, Key, Rgb, Window, WindowSettings};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = WindowSettings::default().title("ARTIEL");
    let config = EffectConfig::new()
        .text("ARTIEL")
        .font_family("artiel")
        .fill_color("#000000")?
        .font_weight(100)?;

    let window = Window::new(settings)?;
    let stop = window.stop_handle();

    // The effect needs the surface format, so it is built on the first frame.
    let state: Option<HoverTextEffect> = None;

    window.render_loop(state, move |effect, input| {
        if effect.is_none() {
            match HoverTextEffect::new(
                input.ctx,
                input.surface_format,
                input.viewport,
                input.scale_factor,
                config.clone(),
            ) {
                Ok(created) => *effect = Some(created),
                Err(err) => {
                    tracing::error!("failed to create hover effect: {:#}", err);
                    return FrameOutput::exit();
                }
            }
        }
        let Some(effect) = effect.as_mut() else {
            return FrameOutput::exit();
        };

        for event in &input.events {
            match event {
                Event::KeyPress { key: Key::Escape } => stop.stop(),
                Event::KeyPress { key: Key::Enter } => {
                    let next = if effect.config().style.fill_color == Rgb::BLACK {
                        Rgb::WHITE
                    } else {
                        Rgb::BLACK
                    };
                    if let Err(err) = effect.set_fill_color(input.ctx, next) {
                        tracing::warn!("texture reload failed: {:#}", err);
                    }
                }
                _ => {
                    if let Err(err) = effect.handle_event(input.ctx, event) {
                        tracing::warn!("event {:?} failed: {:#}", event, err);
                    }
                }
            }
        }

        effect.frame(input.ctx, input.surface_view);
        FrameOutput::new()
    })
}
