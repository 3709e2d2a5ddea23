//! Factory Pattern page.
//!
//! `form_control` builds a boxed `FormControl` from a field description the
//! way the listing's `formControlFactory` picks a component by `type`.

use std::collections::HashMap;

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
- OOP: **the Factory pattern creates objects dynamically.**
- ReactJS: **components are rendered dynamically based on state or props.**

# What is the Factory Pattern

A creational pattern that encapsulates **object creation**, making it more
modular and scalable.

# Same principle with Component Factories

A factory returns a different React component depending on its input,
useful whenever a set of related components is generated dynamically.";

const FORM_SOURCE: &str = "\
// formControlFactory.js
const LazyTextInput = lazy(() => import('./textinput'));
const LazyCheckbox = lazy(() => import('./checkbox'));
const LazyRadioButton = lazy(() => import('./Radiobutton'));

const formControlFactory = (control, formState, handleChange) => {
  switch (control.type) {
    case 'text':
      return <LazyTextInput key={control.name} label={control.label}
        value={formState[control.name] || ''}
        onChange={(e) => handleChange(control.name, e.target.value)} />;
    case 'checkbox':
      return <LazyCheckbox key={control.name} label={control.label}
        checked={formState[control.name] || false}
        onChange={(e) => handleChange(control.name, e.target.checked)} />;
    case 'radio':
      return <LazyRadioButton key={control.name} label={control.label} name={control.name}
        checked={formState[control.name] === control.value}
        onChange={() => handleChange(control.name, control.value)} />;
    default:
      throw new Error(`Unknown control type: ${control.type}`);
  }
};";

const WIDGET_SOURCE: &str = "\
const widgetFactory = (widgetType) => {
  switch (widgetType) {
    case 'chart':
      return (props) => <ChartComponent {...props} />;
    case 'table':
      return (props) => <TableComponent {...props} />;
    case 'stats':
      return (props) => <StatsComponent {...props} />;
    default:
      return null;
  }
};";

const MENU_SOURCE: &str = "\
const menuItemFactory = (itemType) => {
  switch (itemType) {
    case 'admin':
      return (props) => <AdminMenuItem {...props} />;
    case 'user':
      return (props) => <UserMenuItem {...props} />;
    case 'guest':
      return (props) => <GuestMenuItem {...props} />;
    default:
      return null;
  }
};";

const CONTENT_SOURCE: &str = "\
const contentBlockFactory = (blockType) => {
  switch (blockType) {
    case 'text':
      return (props) => <TextBlock {...props} />;
    case 'image':
      return (props) => <ImageBlock {...props} />;
    case 'video':
      return (props) => <VideoBlock {...props} />;
    default:
      return null;
  }
};";

const PROFILE_SOURCE: &str = "\
const profileSectionFactory = (sectionType) => {
  switch (sectionType) {
    case 'about':
      return (props) => <AboutSection {...props} />;
    case 'settings':
      return (props) => <SettingsSection {...props} />;
    case 'activity':
      return (props) => <ActivitySection {...props} />;
    default:
      return null;
  }
};";

/// Field metadata fed to the factory.
struct ControlSpec {
    kind: &'static str,
    name: &'static str,
    label: &'static str,
    /// Option value for radio buttons
    value: Option<&'static str>,
}

type FormState = HashMap<&'static str, &'static str>;

trait FormControl {
    fn render(&self, state: &FormState) -> String;
}

struct TextInput {
    name: &'static str,
    label: &'static str,
}

impl FormControl for TextInput {
    fn render(&self, state: &FormState) -> String {
        let value = state.get(self.name).copied().unwrap_or("");
        format!("{}: [{:_<12}]", self.label, value)
    }
}

struct Checkbox {
    name: &'static str,
    label: &'static str,
}

impl FormControl for Checkbox {
    fn render(&self, state: &FormState) -> String {
        let mark = if state.get(self.name) == Some(&"true") { "x" } else { " " };
        format!("[{mark}] {}", self.label)
    }
}

struct RadioButton {
    name: &'static str,
    label: &'static str,
    value: &'static str,
}

impl FormControl for RadioButton {
    fn render(&self, state: &FormState) -> String {
        let mark = if state.get(self.name) == Some(&self.value) { "•" } else { " " };
        format!("({mark}) {}", self.label)
    }
}

fn form_control(spec: &ControlSpec) -> Result<Box<dyn FormControl>, String> {
    match spec.kind {
        "text" => Ok(Box::new(TextInput {
            name: spec.name,
            label: spec.label,
        })),
        "checkbox" => Ok(Box::new(Checkbox {
            name: spec.name,
            label: spec.label,
        })),
        "radio" => Ok(Box::new(RadioButton {
            name: spec.name,
            label: spec.label,
            value: spec.value.unwrap_or(spec.label),
        })),
        other => Err(format!("Unknown control type: {other}")),
    }
}

struct FormDemo;

impl FormDemo {
    fn controls() -> Vec<ControlSpec> {
        let spec = |kind, name, label, value| ControlSpec {
            kind,
            name,
            label,
            value,
        };
        vec![
            spec("text", "name", "Name", None),
            spec("checkbox", "subscribe", "Subscribe to newsletter", None),
            spec("radio", "plan", "Free plan", Some("free")),
            spec("radio", "plan", "Pro plan", Some("pro")),
            spec("slider", "volume", "Volume", None),
        ]
    }
}

impl Example for FormDemo {
    fn name(&self) -> &str {
        "formControlFactory"
    }

    fn render(&self) -> Vec<String> {
        let state: FormState = [("name", "Ada"), ("subscribe", "true"), ("plan", "pro")]
            .into_iter()
            .collect();
        Self::controls()
            .iter()
            .map(|spec| match form_control(spec) {
                Ok(control) => control.render(&state),
                Err(err) => format!("error: {err}"),
            })
            .collect()
    }
}

fn chart(title: &str) -> String {
    format!("{title}: ▁▃▅▇▅▃")
}

fn table(title: &str) -> String {
    format!("{title}: 3 rows × 4 columns")
}

fn stats(title: &str) -> String {
    format!("{title}: 42 active users")
}

type Widget = fn(&str) -> String;

fn widget(kind: &str) -> Option<Widget> {
    let render: Widget = match kind {
        "chart" => chart,
        "table" => table,
        "stats" => stats,
        _ => return None,
    };
    Some(render)
}

struct DashboardDemo;

impl Example for DashboardDemo {
    fn name(&self) -> &str {
        "widgetFactory"
    }

    fn render(&self) -> Vec<String> {
        let layout = [
            ("chart", "Revenue"),
            ("stats", "Today"),
            ("table", "Orders"),
            ("map", "Regions"),
        ];
        layout
            .iter()
            .map(|(kind, title)| match widget(kind) {
                Some(render) => render(title),
                None => format!("{title}: no widget for '{kind}'"),
            })
            .collect()
    }
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Factory Pattern", DEFINITION),
        Tab::new(
            "Form Field Generator",
            vec![use_case_unit(
                "Form Field Generator",
                "When building a form with various field types (text input, checkbox, \
                 radio button, etc.), a factory can generate the correct component type \
                 based on the field's metadata.",
                FORM_SOURCE,
            )
            .with_example(Renderable::new(FormDemo))],
        ),
        Tab::new(
            "Dashboard Widget Loader",
            vec![use_case_unit(
                "Dashboard Widget Loader",
                "Dynamically load different types of widgets (charts, tables, stats) \
                 on a dashboard based on configuration or user role.",
                WIDGET_SOURCE,
            )
            .with_example(Renderable::new(DashboardDemo))],
        ),
        use_case(
            "Dynamic Menu Items",
            "Dynamic Menu Items",
            "Create different menu items based on user role or application state.",
            MENU_SOURCE,
        ),
        use_case(
            "Content Block Generator",
            "Content Block Generator",
            "Generate different content blocks (text, image, video) dynamically \
             for a content management system.",
            CONTENT_SOURCE,
        ),
        use_case(
            "User Profile Sections",
            "User Profile Section",
            "Load different sections of a user profile (about, settings, activity) \
             based on user actions.",
            PROFILE_SOURCE,
        ),
    ]
}
