//! Selector options and the one-shot completion signal used by the
//! interactive profile picker.

use async_trait::async_trait;
use par_term_config::Profile;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Callback run when the user picks an option. Receives the free text
/// typed into the selector (empty when none).
pub type SelectorCallback = Box<dyn FnOnce(&str) + Send>;

/// A single entry offered by the selector UI.
#[derive(Default)]
pub struct SelectorOption {
    pub name: String,
    pub group: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    /// Lower weights sort first
    pub weight: i32,
    /// Shown for free-text input, `%s` replaced by the typed query
    pub free_input_pattern: Option<String>,
    /// Quick-connect text that would produce this same profile
    pub free_input_equivalent: Option<String>,
    callback: Option<SelectorCallback>,
}

impl fmt::Debug for SelectorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorOption")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("icon", &self.icon)
            .field("color", &self.color)
            .field("description", &self.description)
            .field("weight", &self.weight)
            .field("free_input_pattern", &self.free_input_pattern)
            .field("free_input_equivalent", &self.free_input_equivalent)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl SelectorOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Projection of a profile's own fields (group forced to `""` when unset)
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            group: profile.group_or_empty().to_string(),
            icon: profile.icon.clone(),
            color: profile.color.clone(),
            weight: profile.weight.unwrap_or(0),
            ..Default::default()
        }
    }

    /// Builder method to set group
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Builder method to set weight
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Builder method to set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to accept free text, shown through `pattern`
    pub fn free_input_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.free_input_pattern = Some(pattern.into());
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&str) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Run the option's callback with the typed query. Returns false when
    /// the option has no callback.
    pub fn select(self, query: &str) -> bool {
        match self.callback {
            Some(callback) => {
                callback(query);
                true
            }
            None => false,
        }
    }
}

/// Order options the way selector UIs display them: by weight, then group,
/// keeping insertion order for ties.
pub fn sort_options(options: &mut [SelectorOption]) {
    options.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.group.cmp(&b.group)));
}

/// The picker widget the service hands its options to.
#[async_trait]
pub trait SelectorUi: Send + Sync {
    /// A selection is already on screen
    fn is_active(&self) -> bool;

    /// Show `options` under `prompt`. Implementations invoke exactly one
    /// option's callback when the user picks it, or drop the options when
    /// the selector is dismissed.
    async fn show(&self, prompt: &str, options: Vec<SelectorOption>) -> anyhow::Result<()>;
}

/// Completion signal shared by every option of one selector flow.
///
/// The first [`complete`](Self::complete) wins; later calls are ignored.
pub struct SelectionSignal<T> {
    sender: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for SelectionSignal<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> SelectionSignal<T> {
    pub fn new() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                sender: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// Complete the flow with `value`. Returns false if it was already completed.
    pub fn complete(&self, value: T) -> bool {
        match self.sender.lock().take() {
            Some(tx) => {
                // The receiver only goes away when the flow itself was dropped.
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.sender.lock().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile_forces_empty_group() {
        let option = SelectorOption::from_profile(&Profile::new("local", "zsh").weight(4));
        assert_eq!(option.group, "");
        assert_eq!(option.weight, 4);
        assert!(!option.has_callback());
    }

    #[test]
    fn test_select_runs_callback_with_query() {
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let option = SelectorOption::new("Quick connect")
            .with_callback(move |query| *sink.lock() = query.to_string());
        assert!(option.select("user@host"));
        assert_eq!(*seen.lock(), "user@host");
        assert!(!SelectorOption::new("inert").select(""));
    }

    #[test]
    fn test_sort_options_by_weight_then_group() {
        let mut options = vec![
            SelectorOption::new("x").weight(1).group("b"),
            SelectorOption::new("y").weight(1).group("a"),
            SelectorOption::new("recent").weight(-3),
        ];
        sort_options(&mut options);
        let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["recent", "y", "x"]);
    }

    #[tokio::test]
    async fn test_signal_completes_once() {
        let (signal, rx) = SelectionSignal::new();
        let other = signal.clone();
        assert!(!signal.is_completed());
        assert!(signal.complete(1));
        assert!(!other.complete(2));
        assert!(other.is_completed());
        assert_eq!(rx.await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_signal_dropped_without_completion() {
        let (signal, rx) = SelectionSignal::<u8>::new();
        drop(signal);
        assert!(rx.await.is_err());
    }
}
