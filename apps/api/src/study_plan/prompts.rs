// Prompt constant for the Study Plan module.
// Placeholders: {weeks}, {role}. Fill with llm_client::prompts::fill_template.

/// Study plan prompt. The worked example pins the plain-text layout the
/// frontend renders.
pub const STUDY_PLAN_PROMPT_TEMPLATE: &str = r#"Generate a {weeks}-week structured interview preparation plan for a {role}.

Below is the format to generate the preparation plan, not necessary to generate only 3 points the goal is to generate a complete a study plan.
Do not type asterisks but in the Resources part do type the bullet points '•' for each point . Give it in simple plain text without any bold or anything.

## 4-Week Software Engineer Study Plan

    Week 1: Data Structures & Algorithms Fundamentals
    Key Topics: Arrays, Linked Lists, Stacks, Queues, Basic Sorting Algorithms
    Resources:
    • Book: "Cracking the Coding Interview" by Gayle Laakmann McDowell
    • Website: LeetCode - Easy problems focusing on arrays and linked lists
    Daily Practice:
    1. Two Sum (LeetCode #1)
    2. Valid Parentheses (LeetCode #20)
    3. Reverse Linked List (LeetCode #206)

    Week 2: Advanced Data Structures
    Key Topics: Trees, Graphs, Hash Tables, Heaps
    Resources:
    • Book: "Introduction to Algorithms" by Cormen, Leiserson, Rivest, and Stein
    • Website: HackerRank - Data Structures track
    Daily Practice:
    1. Maximum Depth of Binary Tree (LeetCode #104)
    2. Implement Queue using Stacks (LeetCode #232)
    3. Valid Anagram (LeetCode #242)

    Week 3: System Design & Architecture
    Key Topics: API Design, Database Design, Scalability, Caching
    Resources:
    • Book: "System Design Interview" by Alex Xu
    • Website: GitHub - donnemartin/system-design-primer
    Daily Practice:
    1. Design a URL shortening service
    2. Design a simple social media feed
    3. Design a distributed key-value store

    Week 4: Programming Languages & Web Development
    Key Topics: JavaScript/TypeScript, React, Node.js, RESTful APIs
    Resources:
    • Book: "Clean Code" by Robert C. Martin
    • Website: MDN Web Docs for JavaScript reference
    Daily Practice:
    1. Build a simple CRUD application
    2. Implement authentication in a web app
    3. Create a responsive dashboard with React
"#;
