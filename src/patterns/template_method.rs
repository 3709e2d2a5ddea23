//! Template Method Pattern page.
//!
//! `ListTemplate` and `TableTemplate` fix the rendering skeleton in their
//! provided methods; implementors only fill in the per-item step.

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
- OOP: **defines an algorithm structure in a base class, letting derived
  classes implement specific steps.**
- ReactJS: **HOCs or composition let a base component define the
  structure while props or children provide the customizable parts.**

# What is the Template Method Pattern

Defines the skeleton of an algorithm in a method, deferring some steps to
subclasses. **Subclasses** redefine certain steps **without changing the
algorithm's structure.**

# Same principle with Component Composition

Base components define a general structure, **child components fill in
the details.**

# Code Reusability

Common structure and behavior live in one place. Abstracting shared logic
into HOCs, custom hooks, or render props avoids duplication and keeps it
maintainable.";

const LIST_DESCRIPTION: &str = "\
A list component provides a general structure for rendering a list, and
child components can specify how each item is rendered.

- **TemplateList**: provides the template for the list. It **does not
  know or care** how each item is rendered.
- **Concrete implementations**: TaskList and UserList each define their
  **own item** representation.";

const LIST_SOURCE: &str = "\
function List({ items, renderItem }) {
  return (
    <ul>
      {items.map((item, index) => <li key={index}>{renderItem(item)}</li>)}
    </ul>
  );
}

function TaskList() {
  const tasks = [
    { id: 1, title: 'Task 1', completed: false },
    { id: 2, title: 'Task 2', completed: true },
  ];
  return (
    <List
      items={tasks}
      renderItem={(task) => (
        <div>
          <strong>{task.title}</strong>
          {task.completed ? <span> (Completed)</span> : <span> (Pending)</span>}
        </div>
      )}
    />
  );
}

function UserList() {
  const users = [
    { id: 1, name: 'Alice', age: 25 },
    { id: 2, name: 'Bob', age: 30 },
  ];
  return <List items={users} renderItem={(u) => <span>{u.name} ({u.age} years old)</span>} />;
}";

const TABLE_SOURCE: &str = "\
function Table({ data, renderRow }) {
  return (
    <table>
      <tbody>
        {data.map((item, index) => <tr key={index}>{renderRow(item)}</tr>)}
      </tbody>
    </table>
  );
}

function UserTable() {
  const users = [
    { id: 1, name: 'John Doe', age: 25 },
    { id: 2, name: 'Jane Smith', age: 30 },
  ];
  return <Table data={users} renderRow={(u) => <><td>{u.name}</td><td>{u.age}</td></>} />;
}

function ProductTable() {
  const products = [
    { id: 1, name: 'Product A', price: '$10' },
    { id: 2, name: 'Product B', price: '$20' },
  ];
  return <Table data={products} renderRow={(p) => <><td>{p.name}</td><td>{p.price}</td></>} />;
}";

const HOOK_SOURCE: &str = "\
function useToggle(initialState = false) {
  const [state, setState] = useState(initialState);
  const toggle = () => setState(!state);
  return [state, toggle];
}

function ToggleableComponent() {
  const [isToggled, toggle] = useToggle();
  return (
    <div>
      <button onClick={toggle}>{isToggled ? 'Hide' : 'Show'} Content</button>
      {isToggled && <div>This content is toggled.</div>}
    </div>
  );
}";

const LAYOUT_SOURCE: &str = "\
function Layout({ renderHeader, renderContent, renderFooter }) {
  return (
    <div>
      <header>{renderHeader()}</header>
      <main>{renderContent()}</main>
      <footer>{renderFooter()}</footer>
    </div>
  );
}

function App() {
  return (
    <Layout
      renderHeader={() => <h1>Header Section</h1>}
      renderContent={() => <p>This is the main content.</p>}
      renderFooter={() => <p>Footer Section</p>}
    />
  );
}";

trait ListTemplate {
    type Item;

    fn heading(&self) -> &str;
    fn items(&self) -> &[Self::Item];
    fn render_item(&self, item: &Self::Item) -> String;

    fn render(&self) -> Vec<String> {
        let mut lines = vec![self.heading().to_string()];
        lines.extend(self.items().iter().map(|item| format!("  • {}", self.render_item(item))));
        lines
    }
}

struct Task {
    title: &'static str,
    completed: bool,
}

struct TaskList(Vec<Task>);

impl ListTemplate for TaskList {
    type Item = Task;

    fn heading(&self) -> &str {
        "Tasks"
    }

    fn items(&self) -> &[Task] {
        &self.0
    }

    fn render_item(&self, task: &Task) -> String {
        let status = if task.completed { "Completed" } else { "Pending" };
        format!("{} ({status})", task.title)
    }
}

struct User {
    name: &'static str,
    age: u32,
}

struct UserList(Vec<User>);

impl ListTemplate for UserList {
    type Item = User;

    fn heading(&self) -> &str {
        "Users"
    }

    fn items(&self) -> &[User] {
        &self.0
    }

    fn render_item(&self, user: &User) -> String {
        format!("{} ({} years old)", user.name, user.age)
    }
}

struct ListDemo;

impl Example for ListDemo {
    fn name(&self) -> &str {
        "TaskList and UserList"
    }

    fn render(&self) -> Vec<String> {
        let tasks = TaskList(vec![
            Task { title: "Task 1", completed: false },
            Task { title: "Task 2", completed: true },
        ]);
        let users = UserList(vec![
            User { name: "Alice", age: 25 },
            User { name: "Bob", age: 30 },
        ]);
        let mut lines = tasks.render();
        lines.extend(users.render());
        lines
    }
}

trait TableTemplate {
    fn headers(&self) -> [&'static str; 2];
    fn rows(&self) -> Vec<[String; 2]>;

    /// Column widths come from the widest cell; every table shares this layout.
    fn render(&self) -> Vec<String> {
        let headers = self.headers().map(String::from);
        let rows = self.rows();
        let width = |col: usize| {
            rows.iter()
                .chain(std::iter::once(&headers))
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        };
        let (w0, w1) = (width(0), width(1));
        let format_row = |row: &[String; 2]| format!("│ {:<w0$} │ {:<w1$} │", row[0], row[1]);

        let mut lines = vec![format_row(&headers)];
        lines.push(format!("├─{}─┼─{}─┤", "─".repeat(w0), "─".repeat(w1)));
        lines.extend(rows.iter().map(format_row));
        lines
    }
}

struct UserTable;

impl TableTemplate for UserTable {
    fn headers(&self) -> [&'static str; 2] {
        ["Name", "Age"]
    }

    fn rows(&self) -> Vec<[String; 2]> {
        [("John Doe", 25), ("Jane Smith", 30)]
            .iter()
            .map(|(name, age)| [name.to_string(), age.to_string()])
            .collect()
    }
}

struct ProductTable;

impl TableTemplate for ProductTable {
    fn headers(&self) -> [&'static str; 2] {
        ["Product", "Price"]
    }

    fn rows(&self) -> Vec<[String; 2]> {
        [("Product A", "$10"), ("Product B", "$20")]
            .iter()
            .map(|(name, price)| [name.to_string(), price.to_string()])
            .collect()
    }
}

struct TableDemo;

impl Example for TableDemo {
    fn name(&self) -> &str {
        "UserTable and ProductTable"
    }

    fn render(&self) -> Vec<String> {
        let mut lines = UserTable.render();
        lines.push(String::new());
        lines.extend(ProductTable.render());
        lines
    }
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Template Method Pattern", DEFINITION),
        Tab::new(
            "  Customizable List Component with Render Props",
            vec![use_case_unit(
                "Customizable List Component with Render Props",
                LIST_DESCRIPTION,
                LIST_SOURCE,
            )
            .with_example(Renderable::new(ListDemo))],
        ),
        Tab::new(
            " Dynamic Table with Render Props",
            vec![use_case_unit(
                "Dynamic Table with Render Props",
                "A table component provides a general structure for displaying data, \
                 and different components can specify how to render individual rows and cells.",
                TABLE_SOURCE,
            )
            .with_example(Renderable::new(TableDemo))],
        ),
        use_case(
            " Conditional Rendering with Custom Hooks",
            "Conditional Rendering with Custom Hooks",
            "A custom hook can handle the logic for conditional rendering, \
             allowing the component to focus on the UI.",
            HOOK_SOURCE,
        ),
        use_case(
            "UI Layout with Render Props",
            "UI Layout with Render Props",
            "A render prop component can define a general structure of a layout \
             and allow child components to render specific content.",
            LAYOUT_SOURCE,
        ),
    ]
}
