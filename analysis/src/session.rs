use crate::bundle::MatchPayload;
use crate::projection::{self, ProjectedPoint};
use crate::roster::FallbackPolicy;
use crate::timeline::{self, PlayerTimeline};

#[derive(Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

// Single-writer owner of the derived view model for one review screen. Every
// load recomputes the timeline wholesale, and the token issued per fetch keeps
// a stale response from overwriting fresher state.
#[derive(Debug, Default)]
pub struct ReviewSession {
    generation: u64,
    policy: FallbackPolicy,
    timeline: Option<PlayerTimeline>,
    selected: Option<u64>,
}

impl ReviewSession {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self {
            generation: 0,
            policy,
            timeline: None,
            selected: None,
        }
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    pub fn complete_load(
        &mut self,
        token: LoadToken,
        payload: &MatchPayload,
        puuid: Option<&str>,
    ) -> bool {
        if token.0 != self.generation {
            tracing::debug!(
                stale = token.0,
                current = self.generation,
                "Discarding stale match load"
            );
            return false;
        }

        self.timeline = timeline::build(payload, puuid, self.policy);
        self.selected = None;
        true
    }

    pub fn select(&mut self, timestamp: Option<u64>) {
        self.selected = timestamp;
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn timeline(&self) -> Option<&PlayerTimeline> {
        self.timeline.as_ref()
    }

    pub fn projected(
        &self,
        canvas_width: f64,
        canvas_height: f64,
        filtered_only: bool,
    ) -> Vec<ProjectedPoint> {
        let timeline = match self.timeline.as_ref() {
            Some(t) => t,
            None => return Vec::new(),
        };

        projection::project(
            &timeline.trace,
            self.selected,
            canvas_width,
            canvas_height,
            filtered_only,
        )
    }
}
