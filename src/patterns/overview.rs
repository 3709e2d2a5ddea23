//! "Design Patterns" landing page: background reading, no listings.

use crate::core::content::ContentUnit;
use crate::core::page::Tab;

const ORIGINS: &str = "\
**1977**: Christopher Alexander and his colleagues publish *A Pattern
Language: Towns, Buildings, Construction*. The idea is a \"pattern
language\" for solving recurring design problems in architecture and
urban planning.

**1987**: Kent Beck and Ward Cunningham bring the **idea of design
patterns** into software development.";

const WHAT_ARE_PATTERNS: &str = "\
Design patterns are **reusable solutions** to common problems that occur
during software design and development. They capture practices refined
over time by experienced developers, and give code a structure that is
**modular, maintainable, and scalable**.

Patterns typically address a specific concern: **managing object
creation, structuring classes and objects, handling communication between
objects**, or organizing control flow. Applying them avoids reinventing
the wheel.";

const MODULAR: &str = "\
Modularity means **breaking a system into smaller, self-contained units**
that can be developed, tested, and maintained independently. Each module
has a well-defined interface describing how it interacts with the rest,
so one part of the system can be understood and changed at a time.";

const MAINTAINABLE: &str = "\
Maintainability is the ease with which a system can be **modified,
extended, or repaired** over time. A maintainable system is well
structured and documented, and keeps the risk of unintended side effects
low when it changes.";

const SCALABLE: &str = "\
Scalability is the ability to handle **increasing loads** (more users,
more **data volume, or transaction throughput**) without sacrificing
performance or reliability.";

const ENCAPSULATION: &str = "\
- OOP: **objects encapsulate state and behavior.**
- ReactJS: **components encapsulate state and behavior.**";

const COMPOSITION: &str = "\
- OOP: **inheritance and composition are used for reuse; composition is
  often preferred for flexibility.**
- ReactJS: **strong emphasis on composition through props and children.**";

const POLYMORPHISM: &str = "\
- OOP: **objects of different classes are treated uniformly through a
  common interface.**
- ReactJS: **components adapt and render differently based on the props
  they are given.**";

pub fn tabs() -> Vec<Tab> {
    vec![
        Tab::new(
            "Origins",
            vec![ContentUnit::new("Origins in Architecture", ORIGINS)],
        ),
        Tab::new(
            "What are Design Patterns?",
            vec![ContentUnit::new(
                "What are Design Patterns in general?",
                WHAT_ARE_PATTERNS,
            )],
        ),
        Tab::new(
            "Goals",
            vec![
                ContentUnit::new("Modular", MODULAR),
                ContentUnit::new("Maintainable", MAINTAINABLE),
                ContentUnit::new("Scalable", SCALABLE),
            ],
        ),
        Tab::new(
            "OOP vs ReactJS",
            vec![
                ContentUnit::new("Encapsulation", ENCAPSULATION),
                ContentUnit::new("Inheritance and Composition", COMPOSITION),
                ContentUnit::new("Polymorphism", POLYMORPHISM),
            ],
        ),
    ]
}
