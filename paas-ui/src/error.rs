//! Error display components
//!
//! Messages arrive already worded for the user (the controller prefixes the
//! operation context), so these components only decide how to show them.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl ErrorSeverity {
    pub fn class(&self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "alert-warning",
            ErrorSeverity::Error => "alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "⚠️",
            ErrorSeverity::Error => "❌",
        }
    }
}

/// Error banner, dismissible when `on_dismiss` is given
#[component]
pub fn ErrorAlert(
    /// Message to display
    #[prop(into)]
    message: String,
    #[prop(default = ErrorSeverity::Error)]
    severity: ErrorSeverity,
    /// Callback for dismiss button
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=format!("alert {}", severity.class()) role="alert">
            <div class="alert-icon">{severity.icon()}</div>
            <div class="alert-content">
                <div class="alert-message">{message}</div>
            </div>
            <div class="alert-actions">
                {on_dismiss.map(|on_dismiss| view! {
                    <button
                        class="btn btn-ghost btn-sm"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "✕"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Inline error message for form fields
#[component]
pub fn FieldError(
    /// Error message
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="field-error">
            <span class="field-error-icon">"⚠️"</span>
            <span class="field-error-message">{message}</span>
        </div>
    }
}

/// Replaces a collection that failed to load
#[component]
pub fn LoadingError(
    #[prop(into)] message: String,
    /// Callback for retry button
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="loading-error">
            <div class="loading-error-icon">"❌"</div>
            <h3>"Failed to Load"</h3>
            <p>{message}</p>
            {on_retry.map(|on_retry| view! {
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_retry.call(())
                >
                    "Try Again"
                </button>
            })}
        </div>
    }
}

/// Empty state component (when no data available)
#[component]
pub fn EmptyState(
    #[prop(default = "📦")]
    icon: &'static str,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <p class="no-data">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classes() {
        assert_eq!(ErrorSeverity::Warning.class(), "alert-warning");
        assert_eq!(ErrorSeverity::Error.class(), "alert-error");
        assert_ne!(ErrorSeverity::Warning.icon(), ErrorSeverity::Error.icon());
    }
}
