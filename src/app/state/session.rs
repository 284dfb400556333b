/// Cooking-mode lifecycle. The step pointer only exists while a session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CookingSession {
    #[default]
    Idle,
    Active {
        step: usize,
    },
}

/// How a step should be drawn relative to the session's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Current,
    Done,
}

impl CookingSession {
    pub(in crate::app) fn is_active(&self) -> bool {
        matches!(self, CookingSession::Active { .. })
    }

    pub(in crate::app) fn current_step(&self) -> Option<usize> {
        match *self {
            CookingSession::Active { step } => Some(step),
            CookingSession::Idle => None,
        }
    }

    /// `Idle -> Active(0)`. Returns false when a session is already running.
    pub(in crate::app) fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        *self = CookingSession::Active { step: 0 };
        true
    }

    /// `Active(i) -> Active(i + 1)`, clamped at the last step.
    pub(in crate::app) fn advance(&mut self, step_count: usize) -> bool {
        match self {
            CookingSession::Active { step } if *step + 1 < step_count => {
                *step += 1;
                true
            }
            _ => false,
        }
    }

    pub(in crate::app) fn reset(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        *self = CookingSession::Idle;
        true
    }

    pub(in crate::app) fn is_at_last_step(&self, step_count: usize) -> bool {
        self.current_step()
            .is_some_and(|step| step + 1 >= step_count)
    }

    pub(in crate::app) fn step_status(&self, idx: usize) -> StepStatus {
        match self.current_step() {
            Some(step) if idx == step => StepStatus::Current,
            Some(step) if idx < step => StepStatus::Done,
            _ => StepStatus::Pending,
        }
    }

    /// Share of steps reached, in `[0, 100]`; zero while idle.
    pub(in crate::app) fn progress_percentage(&self, step_count: usize) -> f32 {
        match self.current_step() {
            Some(step) if step_count > 0 => {
                let reached = (step + 1).min(step_count);
                reached as f32 / step_count as f32 * 100.0
            }
            _ => 0.0,
        }
    }
}
