//! Decorator Pattern page.
//!
//! The examples wrap a `View` in decorators the same way the listings wrap
//! React components in HOCs: each wrapper owns the inner view and adds
//! behavior before or after delegating.

use std::cell::RefCell;

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
- OOP: **the Decorator pattern adds behavior to objects.**
- ReactJS: **HOCs add behavior to components.**

# What is the Decorator Pattern

A structural pattern allowing the **dynamic extension of an object's
functionality** by wrapping it in a **new object**.

- **Object composition**: decorators are composed around an object to
  extend it without altering its class.
- **Wrapper objects**: a decorator contains the original object and
  intercepts calls to it, adding behavior before or after delegating.

# What is an HOC (higher order component)?

A function that takes a component and **returns a new component** with
additional props, state, or **extended functionality**. The wrapped
component keeps the original interface.";

const AUTH_DESCRIPTION: &str = "\
Wrap components to ensure only authenticated users can access them.

Create a higher-order component that wraps the **base component
(ProtectedComponent.js)**; the **HOC (withAuth.js)** produces the enhanced
component.";

const AUTH_SOURCE: &str = "\
// withAuth.js
function withAuth(WrappedComponent) {
  return function AuthComponent(props) {
    const isAuthenticated = useAuth();
    if (!isAuthenticated) {
      return <Redirect to=\"/login\" />;
    }
    return <WrappedComponent {...props} />;
  };
}

// ProtectedComponent.js
function ProtectedComponent() {
  return <div>Protected Content</div>;
}

export default withAuth(ProtectedComponent);";

const ERROR_SOURCE: &str = "\
// withErrorBoundary.js
const withErrorBoundary = (WrappedComponent) =>
  class ErrorBoundary extends Component {
    state = { hasError: false };

    static getDerivedStateFromError() {
      return { hasError: true };
    }

    componentDidCatch(error, errorInfo) {
      console.error(error, errorInfo);
    }

    render() {
      if (this.state.hasError) return <h1>Something went wrong.</h1>;
      return <WrappedComponent {...this.props} />;
    }
  };";

const LOGGING_SOURCE: &str = "\
// withLogger.js
function withLogger(WrappedComponent) {
  return function LoggerComponent(props) {
    useEffect(() => {
      console.log(`${WrappedComponent.name} rendered`);
    });
    return <WrappedComponent {...props} />;
  };
}

export default withLogger(AnyComponent);";

const NESTED_SOURCE: &str = "\
// Component.js
import withLogger from './withLogger';
import withAuth from './withAuth';
import withErrorBoundary from './withErrorBoundary';

function Component() {
  return <div>Protected Content</div>;
}

// Applying HOCs, outermost first
export default withLogger(withAuth(withErrorBoundary(Component)));";

const THEME_SOURCE: &str = "\
// withTheme.js
const withTheme = (WrappedComponent, theme) => (props) => (
  <div style={{ background: theme.background, color: theme.color }}>
    <WrappedComponent {...props} />
  </div>
);

export default withTheme(Button, { background: '#222', color: '#eee' });";

const FETCH_SOURCE: &str = "\
// withData.js
const withData = (WrappedComponent, url) => (props) => {
  const [data, setData] = useState(null);
  useEffect(() => {
    fetch(url).then((res) => res.json()).then(setData);
  }, []);
  if (!data) return <div>Loading...</div>;
  return <WrappedComponent data={data} {...props} />;
};";

const PAGINATION_SOURCE: &str = "\
// withPagination.js
const withPagination = (WrappedComponent, pageSize) => ({ items, ...props }) => {
  const [page, setPage] = useState(0);
  const visible = items.slice(page * pageSize, (page + 1) * pageSize);
  return (
    <div>
      <WrappedComponent items={visible} {...props} />
      <button disabled={page === 0} onClick={() => setPage(page - 1)}>Previous</button>
      <button onClick={() => setPage(page + 1)}>Next</button>
    </div>
  );
};";

const I18N_SOURCE: &str = "\
// withTranslation.js
const withTranslation = (WrappedComponent) => (props) => {
  const { locale } = useContext(LocaleContext);
  const t = (key) => translations[locale][key] ?? key;
  return <WrappedComponent t={t} {...props} />;
};";

const ANALYTICS_SOURCE: &str = "\
// withTracking.js
const withTracking = (WrappedComponent, eventName) => (props) => {
  const track = (action) => analytics.track(eventName, { action });
  useEffect(() => track('view'), []);
  return <WrappedComponent onTrack={track} {...props} />;
};";

/// Per-render environment; decorators append to `log`.
struct RenderContext {
    user: Option<&'static str>,
    log: RefCell<Vec<String>>,
}

impl RenderContext {
    fn new(user: Option<&'static str>) -> Self {
        Self {
            user,
            log: RefCell::new(Vec::new()),
        }
    }

    fn log(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

trait View: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> Result<String, String>;
}

struct Protected;

impl View for Protected {
    fn render(&self, ctx: &RenderContext) -> Result<String, String> {
        Ok(format!("Protected Content for {}", ctx.user.unwrap_or("nobody")))
    }
}

/// Always fails, to exercise the error boundary.
struct Broken;

impl View for Broken {
    fn render(&self, _ctx: &RenderContext) -> Result<String, String> {
        Err("widget data missing".to_string())
    }
}

struct WithAuth<V>(V);

impl<V: View> View for WithAuth<V> {
    fn render(&self, ctx: &RenderContext) -> Result<String, String> {
        if ctx.user.is_none() {
            ctx.log("auth: redirect to /login".to_string());
            return Ok("Redirect → /login".to_string());
        }
        self.0.render(ctx)
    }
}

struct WithErrorBoundary<V>(V);

impl<V: View> View for WithErrorBoundary<V> {
    fn render(&self, ctx: &RenderContext) -> Result<String, String> {
        self.0.render(ctx).or_else(|err| {
            ctx.log(format!("error boundary caught: {err}"));
            Ok("Something went wrong.".to_string())
        })
    }
}

struct WithLogger<V> {
    inner: V,
    name: &'static str,
}

impl<V: View> View for WithLogger<V> {
    fn render(&self, ctx: &RenderContext) -> Result<String, String> {
        let result = self.inner.render(ctx);
        ctx.log(format!("{} rendered", self.name));
        result
    }
}

/// Renders one decorated view for each user scenario.
struct DecoratedDemo {
    name: &'static str,
    view: Box<dyn View>,
    users: Vec<Option<&'static str>>,
}

impl Example for DecoratedDemo {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for user in &self.users {
            let ctx = RenderContext::new(*user);
            let output = match self.view.render(&ctx) {
                Ok(text) => text,
                Err(err) => format!("uncaught error: {err}"),
            };
            lines.push(format!("user={:<8} → {}", user.unwrap_or("(none)"), output));
            for entry in ctx.log.borrow().iter() {
                lines.push(format!("    log: {entry}"));
            }
        }
        lines
    }
}

fn auth_demo() -> Renderable {
    Renderable::new(DecoratedDemo {
        name: "withAuth(Protected)",
        view: Box::new(WithAuth(Protected)),
        users: vec![Some("ada"), None],
    })
}

fn error_demo() -> Renderable {
    Renderable::new(DecoratedDemo {
        name: "withErrorBoundary(Broken)",
        view: Box::new(WithErrorBoundary(Broken)),
        users: vec![Some("ada")],
    })
}

fn nested_demo() -> Renderable {
    Renderable::new(DecoratedDemo {
        name: "withLogger(withAuth(withErrorBoundary(Protected)))",
        view: Box::new(WithLogger {
            inner: WithAuth(WithErrorBoundary(Protected)),
            name: "Component",
        }),
        users: vec![Some("ada"), None],
    })
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Decorator Pattern", DEFINITION),
        Tab::new(
            "  Authentication/Authorization",
            vec![use_case_unit("Authentication/Authorization", AUTH_DESCRIPTION, AUTH_SOURCE)
                .with_example(auth_demo())],
        ),
        Tab::new(
            " Error Handling",
            vec![use_case_unit(
                "Error Handling",
                "Catch and handle errors in components gracefully using an error boundary.",
                ERROR_SOURCE,
            )
            .with_example(error_demo())],
        ),
        use_case(
            " Logging",
            "Logging",
            "Log component renders for debugging and performance monitoring.",
            LOGGING_SOURCE,
        ),
        Tab::new(
            "Nested Decorators",
            vec![use_case_unit(
                "Nested Decorators",
                "A component that uses multiple HOCs for different functionalities, \
                 such as logging, authentication, and error handling.",
                NESTED_SOURCE,
            )
            .with_example(nested_demo())],
        ),
        use_case(
            " Styling and Theming",
            "Styling and Theming",
            "Dynamically apply additional styles or themes to components.",
            THEME_SOURCE,
        ),
        use_case(
            " Data Fetching",
            "Data Fetching",
            "Fetch data and pass it as props to the wrapped component.",
            FETCH_SOURCE,
        ),
        use_case(
            " Pagination",
            "Pagination",
            "HOC for handling pagination logic.",
            PAGINATION_SOURCE,
        ),
        use_case(
            " Internationalization (i18n)",
            "Internationalization (i18n)",
            "HOC for providing internationalization support to components.",
            I18N_SOURCE,
        ),
        use_case(
            " Analytics Tracking",
            "Analytics Tracking",
            "HOC for tracking component usage or user interactions for analytics.",
            ANALYTICS_SOURCE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_redirects_anonymous_user() {
        let lines = auth_demo().render();
        assert_eq!(lines[0], "user=ada      → Protected Content for ada");
        assert!(lines[1].ends_with("Redirect → /login"));
        assert_eq!(lines[2], "    log: auth: redirect to /login");
    }

    #[test]
    fn test_error_boundary_catches() {
        let lines = error_demo().render();
        assert!(lines[0].ends_with("Something went wrong."));
        assert!(lines[1].contains("widget data missing"));
    }

    #[test]
    fn test_logger_runs_outermost() {
        let ctx = RenderContext::new(None);
        let view = WithLogger {
            inner: WithAuth(Protected),
            name: "Component",
        };
        assert_eq!(view.render(&ctx).unwrap(), "Redirect → /login");
        assert_eq!(
            *ctx.log.borrow(),
            vec!["auth: redirect to /login", "Component rendered"]
        );
    }

    #[test]
    fn test_ten_tabs() {
        assert_eq!(tabs().len(), 10);
    }
}
