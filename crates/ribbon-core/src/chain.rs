//! Chained-link follower.
//!
//! The head chases a target under a speed cap with a damped heading; every
//! following link is pulled to a fixed distance behind its predecessor and
//! may only turn `max_turn_per_step` relative to it. That turn limit is what
//! keeps the ribbon from kinking.

use crate::config::ChainConfig;
use crate::constants::INITIAL_HEADING;
use crate::error::ConfigError;
use crate::geometry::{delta_angle, direction, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub position: Point,
    /// Radians; the direction the link faces (towards its predecessor).
    pub heading: f64,
}

impl Link {
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}

#[derive(Clone, Debug)]
pub struct Chain {
    links: Vec<Link>,
    config: ChainConfig,
    last_step: f64,
    path_length: f64,
}

impl Chain {
    /// Lays the links out along +x from `origin`, all facing back towards it.
    pub fn new(config: ChainConfig, origin: Point) -> Result<Self, ConfigError> {
        config.validate()?;
        let links = (0..config.link_count)
            .map(|i| {
                Link::new(
                    origin + Point::new(i as f64 * config.segment_spacing, 0.0),
                    INITIAL_HEADING,
                )
            })
            .collect();
        Ok(Self::from_links(links, config))
    }

    /// Builds a chain from explicit link state. The link count in `config` is
    /// replaced by `links.len()`.
    pub fn from_links(links: Vec<Link>, mut config: ChainConfig) -> Self {
        config.link_count = links.len();
        Self {
            links,
            config,
            last_step: 0.0,
            path_length: 0.0,
        }
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub fn head(&self) -> &Link {
        &self.links[0]
    }

    #[inline]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Distance the head moved during the last effective `advance`.
    #[inline]
    pub fn last_step(&self) -> f64 {
        self.last_step
    }

    /// Total distance travelled by the head since setup.
    #[inline]
    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    /// Moves the whole chain one tick towards `target`.
    ///
    /// Returns `false` without touching any link when the head is already
    /// within `noop_threshold` of the target on both axes.
    pub fn advance(&mut self, target: Point) -> bool {
        let Some(head) = self.links.first().copied() else {
            return false;
        };
        let offset = target - head.position;
        if offset.x.abs() < self.config.noop_threshold && offset.y.abs() < self.config.noop_threshold
        {
            return false;
        }

        self.advance_head(offset);
        self.propagate();

        debug_assert!(
            self.links.iter().all(Link::is_finite),
            "chain produced a non-finite link"
        );
        true
    }

    fn advance_head(&mut self, offset: Point) {
        let cfg = &self.config;
        let d = offset.length();
        let k = if d == 0.0 {
            1.0
        } else {
            cfg.max_head_speed.min(d) / d
        };
        let desired = offset.y.atan2(offset.x);
        let head = &mut self.links[0];
        let delta = delta_angle(head.heading, desired);
        head.heading += delta * (1.0 - cfg.heading_damping);
        let step = k * d / cfg.speed_damp;
        head.position += direction(head.heading) * step;
        self.last_step = step;
        self.path_length += step;
    }

    fn propagate(&mut self) {
        let spacing = self.config.segment_spacing;
        let limit = self.config.max_turn_per_step;
        for i in 1..self.links.len() {
            let prev = self.links[i - 1];
            let link = &mut self.links[i];
            let to_prev = prev.position - link.position;
            let raw = to_prev.y.atan2(to_prev.x);
            link.heading = if i == 1 {
                raw
            } else {
                let d = delta_angle(raw, prev.heading);
                let rd = limit.min(d.abs());
                if d > 0.0 {
                    prev.heading - rd
                } else {
                    prev.heading + rd
                }
            };
            link.position = prev.position - direction(prev.heading) * spacing;
        }
    }
}
