use crate::params::PageParams;
use crate::texture::TextTexture;
use glam::DVec2;
use ribbon_core::{
    AlphaBuffer, ColorRamp, RainConfig, RainSketch, Rgb, RibbonSketch, SketchConfig, SketchKind,
    Viewport, TINT_STEPS,
};
use std::time::Duration;
use web_sys as web;

/// Type twister extras: the text it is mapped from and the scrolling tint.
pub struct TextRibbon {
    pub texture: TextTexture,
    pub mask: AlphaBuffer,
    pub tints: Vec<Rgb>,
}

pub enum Scene {
    Ribbon {
        sketch: RibbonSketch,
        text: Option<TextRibbon>,
    },
    Rain(RainSketch),
}

impl Scene {
    pub fn build(
        document: &web::Document,
        params: &PageParams,
        viewport: &Viewport,
        seed: u64,
    ) -> anyhow::Result<Self> {
        if params.kind == SketchKind::WetPaint {
            log::info!("[scene] wet paint");
            return Ok(Scene::Rain(RainSketch::new(
                RainConfig::default(),
                viewport,
                seed,
            )));
        }
        let text = match params.kind {
            SketchKind::TypeTwister => {
                let texture = TextTexture::new(
                    document,
                    &params.text,
                    viewport.mobile,
                    viewport.resolution(),
                )?;
                let mask = texture.alpha_mask()?;
                Some(TextRibbon {
                    texture,
                    mask,
                    tints: ColorRamp::tint().table(TINT_STEPS),
                })
            }
            _ => None,
        };
        let config = ribbon_config(params, viewport, text.as_ref())?;
        let sketch = RibbonSketch::new(config, viewport, seed)?;
        log::info!(
            "[scene] {} with {} links",
            params.kind.name(),
            sketch.chain().len()
        );
        Ok(Scene::Ribbon { sketch, text })
    }

    pub fn pointer_input(&mut self, css: DVec2, now: Duration) {
        match self {
            Scene::Ribbon { sketch, .. } => sketch.pointer_input(css, now),
            Scene::Rain(rain) => rain.pointer_input(css, now),
        }
    }

    /// Applies a settled resize. Ribbons whose preset is unchanged keep their
    /// chain; anything else is rebuilt from scratch.
    pub fn resize(
        &mut self,
        document: &web::Document,
        params: &PageParams,
        viewport: &Viewport,
        seed: u64,
    ) -> anyhow::Result<()> {
        match self {
            Scene::Rain(rain) => {
                rain.resize(viewport);
                Ok(())
            }
            Scene::Ribbon { sketch, text } => {
                if text.is_none() && ribbon_config(params, viewport, None)? == *sketch.config() {
                    sketch.resize(viewport);
                    return Ok(());
                }
                *self = Scene::build(document, params, viewport, seed)?;
                Ok(())
            }
        }
    }
}

fn ribbon_config(
    params: &PageParams,
    viewport: &Viewport,
    text: Option<&TextRibbon>,
) -> anyhow::Result<SketchConfig> {
    let mut config = match (params.kind, text) {
        (SketchKind::TypeTwister, Some(t)) => {
            SketchConfig::type_twister(viewport, t.texture.width(), t.texture.height())?
        }
        (SketchKind::SoftIce, _) => SketchConfig::softice(viewport),
        _ => SketchConfig::toothpaste(viewport),
    };
    if text.is_none() {
        if let Some(paint) = params.paint {
            config.ribbon.paint = paint;
        }
    }
    Ok(config)
}
