//! Strategy Pattern page.
//!
//! The live examples are small strategy families of their own: a sorter and
//! a validator, each run against every interchangeable implementation.

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
- OOP: **the Strategy pattern allows dynamic selection of algorithms.**
- ReactJS: **composition and hooks allow dynamic rendering logic.**

# What is the Strategy Pattern

A behavioral pattern that selects an **algorithm's behavior at runtime**.
It defines a family of algorithms, encapsulates each one, and makes them
interchangeable.

- **Strategy**: the common interface for all supported algorithms.
- **ConcreteStrategy**: an implementation of that interface.
- **Context**: holds a strategy, lets callers swap it, and calls it.

# Same principle in React

Composition and hooks let a component hold the current strategy in state
and delegate to it.";

const PAYMENT_SOURCE: &str = "\
// PaymentStrategies.js
export const PayPalPayment = { pay: () => console.log('Processing PayPal payment...') };
export const CreditCardPayment = { pay: () => console.log('Processing Credit Card payment...') };
export const BitcoinPayment = { pay: () => console.log('Processing Bitcoin payment...') };

// PaymentComponent.js
const PaymentComponent = () => {
  const [strategy, setStrategy] = useState(null);
  const handlePayment = () =>
    strategy ? strategy.pay() : console.log('Select a payment method.');
  return (
    <div>
      <select onChange={(e) => setStrategy(STRATEGIES[e.target.value] ?? null)}>
        <option value=\"\">Select Payment Method</option>
        <option value=\"paypal\">PayPal</option>
        <option value=\"creditcard\">Credit Card</option>
        <option value=\"bitcoin\">Bitcoin</option>
      </select>
      <button onClick={handlePayment}>Pay Now</button>
    </div>
  );
};";

const VALIDATION_SOURCE: &str = "\
// ValidationStrategies.js
export const RequiredValidation = { validate: (value) => value.trim() !== '' };
export const EmailValidation = { validate: (value) => /\\S+@\\S+\\.\\S+/.test(value) };

// FormComponent.js
const FormComponent = () => {
  const [value, setValue] = useState('');
  const [strategy, setStrategy] = useState(RequiredValidation);
  const handleValidation = () =>
    console.log(strategy.validate(value) ? 'Validation passed' : 'Validation failed');
  return (
    <div>
      <input type=\"text\" onChange={(e) => setValue(e.target.value)} />
      <select onChange={(e) =>
        setStrategy(e.target.value === 'email' ? EmailValidation : RequiredValidation)}>
        <option value=\"required\">Required</option>
        <option value=\"email\">Email</option>
      </select>
      <button onClick={handleValidation}>Validate</button>
    </div>
  );
};";

const SORTING_SOURCE: &str = "\
// SortingStrategies.js
export const BubbleSort = {
  sort: (data) => {
    const arr = [...data];
    for (let i = 0; i < arr.length - 1; i++)
      for (let j = 0; j < arr.length - i - 1; j++)
        if (arr[j] > arr[j + 1]) [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
    return arr;
  }
};

export const QuickSort = {
  sort: (data) => {
    if (data.length < 2) return data;
    const [pivot, ...rest] = data;
    return [
      ...QuickSort.sort(rest.filter((x) => x <= pivot)),
      pivot,
      ...QuickSort.sort(rest.filter((x) => x > pivot)),
    ];
  }
};

// SortComponent.js
const SortComponent = () => {
  const [data, setData] = useState([5, 3, 8, 1, 2]);
  const [strategy, setStrategy] = useState(BubbleSort);
  return (
    <div>
      <select onChange={(e) => setStrategy(e.target.value === 'quick' ? QuickSort : BubbleSort)}>
        <option value=\"bubble\">Bubble Sort</option>
        <option value=\"quick\">Quick Sort</option>
      </select>
      <button onClick={() => setData(strategy.sort(data))}>Sort</button>
      <div>{data.join(', ')}</div>
    </div>
  );
};";

const AUTH_SOURCE: &str = "\
// AuthStrategies.js
export const OAuth = { authenticate: () => console.log('Authenticating with OAuth...') };
export const JWT = { authenticate: () => console.log('Authenticating with JWT...') };

// AuthComponent.js
const AuthComponent = () => {
  const [strategy, setStrategy] = useState(OAuth);
  return (
    <div>
      <select onChange={(e) => setStrategy(e.target.value === 'jwt' ? JWT : OAuth)}>
        <option value=\"oauth\">OAuth</option>
        <option value=\"jwt\">JWT</option>
      </select>
      <button onClick={() => strategy.authenticate()}>Authenticate</button>
    </div>
  );
};";

const NOTIFICATION_SOURCE: &str = "\
// NotificationStrategies.js
export const EmailNotification = { send: (message) => console.log('Sending email') };
export const SMSNotification = { send: (message) => console.log('Sending SMS') };
export const PushNotification = { send: (message) => console.log('Sending push notification') };

// NotificationComponent.js
const NotificationComponent = () => {
  const [message, setMessage] = useState('');
  const [strategy, setStrategy] = useState(EmailNotification);
  return (
    <div>
      <input type=\"text\" onChange={(e) => setMessage(e.target.value)} />
      <select onChange={(e) => setStrategy(BY_CHANNEL[e.target.value] ?? EmailNotification)}>
        <option value=\"email\">Email</option>
        <option value=\"sms\">SMS</option>
        <option value=\"push\">Push Notification</option>
      </select>
      <button onClick={() => strategy.send(message)}>Send Notification</button>
    </div>
  );
};";

trait SortStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &[i32]) -> Vec<i32>;
}

struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, data: &[i32]) -> Vec<i32> {
        let mut arr = data.to_vec();
        let n = arr.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                }
            }
        }
        arr
    }
}

struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort(&self, data: &[i32]) -> Vec<i32> {
        let Some((&pivot, rest)) = data.split_first() else {
            return Vec::new();
        };
        let (lesser, greater): (Vec<i32>, Vec<i32>) = rest.iter().partition(|&&x| x <= pivot);
        let mut sorted = self.sort(&lesser);
        sorted.push(pivot);
        sorted.extend(self.sort(&greater));
        sorted
    }
}

/// Sorts the same input with every strategy.
struct SortingDemo {
    input: Vec<i32>,
    strategies: Vec<Box<dyn SortStrategy>>,
}

impl SortingDemo {
    fn new() -> Self {
        Self {
            input: vec![5, 3, 8, 1, 2],
            strategies: vec![Box::new(BubbleSort), Box::new(QuickSort)],
        }
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Example for SortingDemo {
    fn name(&self) -> &str {
        "sorting strategies"
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("input: {}", join(&self.input))];
        for strategy in &self.strategies {
            lines.push(format!(
                "{:<12} → {}",
                strategy.name(),
                join(&strategy.sort(&self.input))
            ));
        }
        lines
    }
}

type Validate = fn(&str) -> bool;

fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Same shape as `\S+@\S+\.\S+`.
fn email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let no_space = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
    match domain.rsplit_once('.') {
        Some((host, tld)) => no_space(local) && no_space(host) && no_space(tld),
        None => false,
    }
}

struct ValidationDemo {
    strategies: [(&'static str, Validate); 2],
    inputs: [&'static str; 3],
}

impl Example for ValidationDemo {
    fn name(&self) -> &str {
        "validation strategies"
    }

    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for input in self.inputs {
            for (name, validate) in self.strategies {
                let verdict = if validate(input) { "passed" } else { "failed" };
                lines.push(format!("{:<10} {:<18} {}", name, format!("{input:?}"), verdict));
            }
        }
        lines
    }
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Strategy Pattern", DEFINITION),
        use_case(
            "  Payment Processing",
            "Payment Processing",
            "Different payment methods require different processing strategies.",
            PAYMENT_SOURCE,
        ),
        Tab::new(
            " Form Validation",
            vec![
                use_case_unit(
                    "Form Validation",
                    "Different validation strategies for form fields.",
                    VALIDATION_SOURCE,
                )
                .with_example(Renderable::new(ValidationDemo {
                    strategies: [("Required", required), ("Email", email)],
                    inputs: ["", "ada@example.com", "not an email"],
                })),
            ],
        ),
        Tab::new(
            " Sorting Algorithms",
            vec![
                use_case_unit(
                    "Sorting Algorithms",
                    "Different sorting strategies for sorting data.",
                    SORTING_SOURCE,
                )
                .with_example(Renderable::new(SortingDemo::new())),
            ],
        ),
        use_case(
            "Authentication Methods",
            "Authentication Methods",
            "Different strategies for authentication (e.g., OAuth, JWT).",
            AUTH_SOURCE,
        ),
        use_case(
            " Notification Systems",
            "Notification Systems",
            "Different strategies for sending notifications (e.g., Email, SMS, Push).",
            NOTIFICATION_SOURCE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::Page;

    #[test]
    fn test_sort_strategies_agree() {
        let input = [5, 3, 8, 1, 2, 3];
        assert_eq!(BubbleSort.sort(&input), vec![1, 2, 3, 3, 5, 8]);
        assert_eq!(QuickSort.sort(&input), BubbleSort.sort(&input));
        assert!(QuickSort.sort(&[]).is_empty());
    }

    #[test]
    fn test_sorting_demo_output() {
        let lines = SortingDemo::new().render();
        assert_eq!(lines[0], "input: 5, 3, 8, 1, 2");
        assert!(lines[1].starts_with("Bubble Sort"));
        assert!(lines[1].ends_with("1, 2, 3, 5, 8"));
        assert!(lines[2].ends_with("1, 2, 3, 5, 8"));
    }

    #[test]
    fn test_validators() {
        assert!(!required("   "));
        assert!(required("x"));
        assert!(email("ada@example.com"));
        assert!(!email("ada@example"));
        assert!(!email("a da@example.com"));
        assert!(!email("@example.com"));
    }

    #[test]
    fn test_padded_labels_trimmed_on_page() {
        let page = Page::new("strategy", "Strategy Pattern", tabs()).unwrap();
        assert_eq!(
            page.tab_labels(),
            vec![
                "Definition",
                "Payment Processing",
                "Form Validation",
                "Sorting Algorithms",
                "Authentication Methods",
                "Notification Systems"
            ]
        );
    }
}
