//! Observer Pattern page.
//!
//! The examples mirror the Context + `useReducer` listings: a `Store` owns
//! state, applies dispatched actions through a reducer, and notifies every
//! subscribed observer after each change.

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
- OOP: **the Observer pattern allows objects to react to changes in other
  objects.**
- ReactJS: **the Context API and the useReducer hook notify components
  automatically when state changes.**

# What is the Observer Pattern

A behavioral pattern defining a **one-to-many relationship** between
objects: when one object changes state, all its **dependents are
notified** and updated automatically.

# Same principle with the Context API

In React the pattern is implemented with state management libraries like
**Redux** or with the **Context API**.

- **Context API**: global state any component in the tree can read
  without passing props down at every level.
- **useReducer**: manages complex state transitions in function
  components.

# Application in React

- **Centralized state management**: one place holds the state.
- **Decoupled components**: components subscribe through context instead
  of owning the state.
- **Automatic re-renders**: context consumers re-render when the value
  changes, acting as observers.";

const AUTH_SOURCE: &str = "\
// AuthContext.js
const authReducer = (state, action) => {
  switch (action.type) {
    case 'login':
      return { ...state, user: action.payload };
    case 'logout':
      return { ...state, user: null };
    default:
      throw new Error('Unknown action');
  }
};

export const AuthProvider = ({ children }) => {
  const [state, dispatch] = useReducer(authReducer, { user: null });
  return (
    <AuthStateContext.Provider value={state}>
      <AuthDispatchContext.Provider value={dispatch}>{children}</AuthDispatchContext.Provider>
    </AuthStateContext.Provider>
  );
};

// Login.js
function Login() {
  const dispatch = useAuthDispatch();
  const handleLogin = () => dispatch({ type: 'login', payload: { name: 'John Doe' } });
  return <button onClick={handleLogin}>Login</button>;
}";

const CART_SOURCE: &str = "\
// CartContext.js
const cartReducer = (state, action) => {
  switch (action.type) {
    case 'add_item':
      return { ...state, items: [...state.items, action.payload] };
    case 'remove_item':
      return { ...state, items: state.items.filter((item) => item.id !== action.payload.id) };
    default:
      throw new Error('Unknown action');
  }
};

// AddToCart.js
function AddToCart({ item }) {
  const dispatch = useCartDispatch();
  return <button onClick={() => dispatch({ type: 'add_item', payload: item })}>Add to Cart</button>;
}

// Cart.js
function Cart() {
  const { items } = useCartState();
  return <ul>{items.map((item) => <li key={item.id}>{item.name}</li>)}</ul>;
}";

const CHAT_SOURCE: &str = "\
// ChatContext.js
const chatReducer = (state, action) => {
  switch (action.type) {
    case 'send_message':
      return { ...state, messages: [...state.messages, action.payload], unread: state.unread + 1 };
    case 'mark_read':
      return { ...state, unread: 0 };
    default:
      throw new Error('Unknown action');
  }
};

// UnreadBadge.js
function UnreadBadge() {
  const { unread } = useChatState();
  return unread > 0 ? <span className=\"badge\">{unread}</span> : null;
}";

const FORM_SOURCE: &str = "\
// FormContext.js
const formReducer = (state, action) => {
  switch (action.type) {
    case 'next':
      return { ...state, step: state.step + 1, data: { ...state.data, ...action.payload } };
    case 'back':
      return { ...state, step: state.step - 1 };
    default:
      throw new Error('Unknown action');
  }
};

// MultiStepForm.js
function MultiStepForm() {
  const { step } = useFormState();
  return [<StepOne />, <StepTwo />, <Summary />][step];
}";

type Observer<S> = Box<dyn Fn(&S) -> String>;

/// Subject: holds state and notifies observers after each dispatch.
struct Store<S, A> {
    state: S,
    reducer: fn(&S, &A) -> S,
    observers: Vec<(&'static str, Observer<S>)>,
}

impl<S, A> Store<S, A> {
    fn new(state: S, reducer: fn(&S, &A) -> S) -> Self {
        Self {
            state,
            reducer,
            observers: Vec::new(),
        }
    }

    fn subscribe(&mut self, name: &'static str, observer: impl Fn(&S) -> String + 'static) {
        self.observers.push((name, Box::new(observer)));
    }

    /// Apply `action` and return one notification line per observer.
    fn dispatch(&mut self, action: &A) -> Vec<String> {
        self.state = (self.reducer)(&self.state, action);
        self.observers
            .iter()
            .map(|(name, observer)| format!("  {name} sees {}", observer(&self.state)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    name: &'static str,
}

#[derive(Debug)]
enum CartAction {
    AddItem(Item),
    RemoveItem(u32),
}

#[allow(clippy::ptr_arg)] // shape fixed by Store::reducer
fn cart_reducer(items: &Vec<Item>, action: &CartAction) -> Vec<Item> {
    match action {
        CartAction::AddItem(item) => {
            let mut next = items.clone();
            next.push(item.clone());
            next
        }
        CartAction::RemoveItem(id) => items.iter().filter(|i| i.id != *id).cloned().collect(),
    }
}

struct CartDemo;

impl Example for CartDemo {
    fn name(&self) -> &str {
        "cart store with two observers"
    }

    fn render(&self) -> Vec<String> {
        let mut store = Store::new(Vec::new(), cart_reducer);
        store.subscribe("CartBadge", |items: &Vec<Item>| format!("{} item(s)", items.len()));
        store.subscribe("CartList", |items: &Vec<Item>| {
            let names: Vec<&str> = items.iter().map(|i| i.name).collect();
            format!("[{}]", names.join(", "))
        });

        let actions = [
            CartAction::AddItem(Item { id: 1, name: "Sample Item" }),
            CartAction::AddItem(Item { id: 2, name: "Coffee Mug" }),
            CartAction::RemoveItem(1),
        ];
        let mut lines = Vec::new();
        for action in &actions {
            lines.push(format!("dispatch {action:?}"));
            lines.extend(store.dispatch(action));
        }
        lines
    }
}

#[derive(Debug, Clone, Default)]
struct ChatState {
    messages: Vec<&'static str>,
    unread: usize,
}

#[derive(Debug)]
enum ChatAction {
    SendMessage(&'static str),
    MarkRead,
}

fn chat_reducer(state: &ChatState, action: &ChatAction) -> ChatState {
    match action {
        ChatAction::SendMessage(text) => {
            let mut next = state.clone();
            next.messages.push(text);
            next.unread += 1;
            next
        }
        ChatAction::MarkRead => ChatState {
            unread: 0,
            ..state.clone()
        },
    }
}

struct ChatDemo;

impl Example for ChatDemo {
    fn name(&self) -> &str {
        "chat store with unread badge"
    }

    fn render(&self) -> Vec<String> {
        let mut store = Store::new(ChatState::default(), chat_reducer);
        store.subscribe("UnreadBadge", |s: &ChatState| format!("{} unread", s.unread));
        store.subscribe("MessageList", |s: &ChatState| {
            format!("last: {}", s.messages.last().copied().unwrap_or("-"))
        });

        let actions = [
            ChatAction::SendMessage("hi there"),
            ChatAction::SendMessage("are you around?"),
            ChatAction::MarkRead,
        ];
        let mut lines = Vec::new();
        for action in &actions {
            lines.push(format!("dispatch {action:?}"));
            lines.extend(store.dispatch(action));
        }
        lines
    }
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Observer Pattern", DEFINITION),
        use_case(
            "  User Authentication",
            "User Authentication",
            "User can observe the actions like login, logout.",
            AUTH_SOURCE,
        ),
        Tab::new(
            " Shopping Cart",
            vec![use_case_unit(
                "Shopping Cart",
                "User can observe for cart actions like additem, removeitem",
                CART_SOURCE,
            )
            .with_example(Renderable::new(CartDemo))],
        ),
        Tab::new(
            " Chat Application",
            vec![use_case_unit(
                "Chat Application",
                "User can observe the actions like send message, unreadmessage",
                CHAT_SOURCE,
            )
            .with_example(Renderable::new(ChatDemo))],
        ),
        use_case(
            "Multi-Step Form",
            "Multi-Step Form",
            "Every step observes the shared form state; moving forward or back \
             notifies the whole form.",
            FORM_SOURCE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_observer_notified_per_dispatch() {
        let lines = CartDemo.render();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "  CartBadge sees 1 item(s)");
        assert_eq!(lines[2], "  CartList sees [Sample Item]");
        assert_eq!(lines[8], "  CartList sees [Coffee Mug]");
    }

    #[test]
    fn test_chat_mark_read_keeps_messages() {
        let state = chat_reducer(&ChatState::default(), &ChatAction::SendMessage("a"));
        let state = chat_reducer(&state, &ChatAction::MarkRead);
        assert_eq!(state.unread, 0);
        assert_eq!(state.messages, vec!["a"]);
    }
}
