// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 断言用法测试模块
///
/// 覆盖相等、否定、正则、大小比较、包含、部分匹配和JSON路径断言

#[cfg(test)]
mod tests {
    use calcrs::assert_json_path;
    use calcrs::domain::models::user::{Project, User};
    use calcrs::utils::json_path;
    use regex::Regex;
    use serde_json::json;

    fn ivan() -> User {
        User::new("Ivan")
            .with_address("Kabarak, Nakuru, Kenya")
            .with_project("Project 1")
            .with_project("Project 2")
    }

    #[test]
    fn test_equality() {
        assert_eq!(1 + 1, 2);
        assert_eq!("Juntao", "Juntao");
        assert_eq!(User::new("Juntao"), User::new("Juntao"));
    }

    #[test]
    fn test_identity() {
        let user = User::new("Juntao");
        let copy = user.clone();

        // Equal by value, but distinct objects
        assert_eq!(user, copy);
        assert!(!std::ptr::eq(&user, &copy));
        assert!(std::ptr::eq(&user, &user));
    }

    #[test]
    fn test_negation() {
        assert_ne!(1 + 2, 2);
    }

    #[test]
    fn test_match_regular_expression() {
        assert!(Regex::new(r"\w+").unwrap().is_match("juntao"));
    }

    #[test]
    fn test_match_phone_numbers() {
        let phone = Regex::new(r"^\d{3}-\d{4}-\d{4}$").unwrap();
        assert!(phone.is_match("185-3345-3343"));
        assert!(!phone.is_match("1853-3345-3343"));
    }

    #[test]
    fn test_compare_numbers() {
        let sum = 1 + 2;
        assert!(sum > 2);
        assert!(sum >= 2);
        assert!(sum < 4);
        assert!(sum <= 4);
    }

    #[test]
    fn test_array_contains() {
        let users = ["Juntao", "Abruzzi", "Alex"];
        assert!(users.contains(&"Juntao"));
        assert!(users.iter().any(|u| std::ptr::eq(*u, users[0])));
    }

    #[test]
    fn test_object_in_array() {
        let users = vec![User::new("Juntao"), User::new("Alex")];
        assert!(users.contains(&User::new("Juntao")));

        let first = &users[0];
        assert!(users.iter().any(|u| std::ptr::eq(u, first)));
    }

    #[test]
    fn test_defined_fields() {
        let user = json!({
            "name": "Juntao",
            "address": "Xian, Shaanxi, China"
        });
        assert!(user.get("name").is_some());
        assert!(user.get("age").is_none());
    }

    #[test]
    fn test_string_containing() {
        assert!("Juntao Qiu".contains("Juntao"));
    }

    #[test]
    fn test_array_containing() {
        let users = ["Juntao", "Abruzzi", "Alex"];
        let expected = ["Juntao", "Abruzzi"];
        assert!(expected.iter().all(|name| users.contains(name)));
    }

    #[test]
    fn test_object_containing() {
        let user = ivan();

        assert!(user.name.contains("Ivan"));
        assert!(user.address.contains("Kabarak"));
        assert!(user
            .projects
            .iter()
            .any(|project| project.name.contains("Project 1")));
        assert!(matches!(
            user.projects.as_slice(),
            [Project { name }, ..] if name == "Project 1"
        ));
    }

    #[test]
    fn test_json_path_query() {
        let value = serde_json::to_value(ivan()).unwrap();

        let projects = json_path::query(&value, "$.projects").unwrap();
        tracing::info!(projects = %json!(projects), "projects");
        assert_eq!(
            projects,
            vec![&json!([{ "name": "Project 1" }, { "name": "Project 2" }])]
        );

        let project_name = json_path::query(&value, "$.projects[0].name").unwrap();
        assert_eq!(project_name, vec![&json!("Project 1")]);
    }

    #[test]
    fn test_matches_json_path() {
        let user = ivan();
        assert_json_path!(user, "$.name");
        assert_json_path!(user, "$.projects[1].name");
        assert_json_path!(user, not "$.age");
    }

    #[test]
    #[should_panic(expected = "not to match JSON path $.address")]
    fn test_matches_json_path_failure() {
        assert_json_path!(ivan(), not "$.address");
    }
}
