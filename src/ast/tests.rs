use super::*;
use crate::error::ErrorType;

/// The reference output fixtures only fix the token sequence, not inter-token whitespace.
fn remove_spaces(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn assert_tokens(actual: &str, expected: &str) {
    assert_eq!(remove_spaces(actual), remove_spaces(expected));
}

#[test]
fn accepts_no_find_value() {
    let user = Query::new("user");
    assert_tokens(&user.render(), "user");
}

#[test]
fn accepts_a_null_argument_value() {
    let user = Query::new("user").filter([("id", Value::Null)]);
    assert_tokens(&user.render(), "user (id: null)");
}

#[test]
fn accepts_an_undefined_argument_value() {
    let user = Query::new("user").filter([("id", Value::Undefined)]);
    assert_tokens(&user.render(), "user (id: undefined)");
}

#[test]
fn accepts_a_single_find_value() {
    let user = Query::new("user").find(["age"]).unwrap();
    assert_tokens(&user.render(), "user{age}");
}

#[test]
fn renders_name_and_alias() {
    let user = Query::new("user").set_alias("sam").find(["name"]).unwrap();
    assert_tokens(&user.render(), "sam : user{name}");
}

#[test]
fn renders_name_and_arguments() {
    let user = Query::new("user")
        .filter([("id", Value::Int(12345))])
        .find(["name"])
        .unwrap();
    assert_tokens(&user.render(), "user(id:12345){name}");

    let user = Query::new("user")
        .filter([("id", Value::Int(12345)), ("age", Value::Int(34))])
        .find(["name"])
        .unwrap();
    assert_tokens(&user.render(), "user(id:12345, age:34){name}");
}

#[test]
fn accumulates_repeated_filter_calls_in_call_order() {
    let user = Query::new("user")
        .filter([("id", Value::Int(1))])
        .filter([("age", Value::Int(34))])
        .find(["name"])
        .unwrap();
    assert_eq!(user.render(), "user(id: 1, age: 34) { name }");
}

#[test]
fn accepts_an_aliased_find_value() {
    let user = Query::new("user")
        .find([Selection::alias("nickname", "name")])
        .unwrap();
    assert_tokens(&user.render(), "user{nickname:name}");
}

#[test]
fn accepts_multiple_find_values() {
    let user = Query::new("user").find(["firstname", "lastname"]).unwrap();
    assert_tokens(&user.render(), "user{firstname, lastname}");
}

#[test]
fn nests_queries() {
    let profile_picture = Query::new("profilePicture")
        .filter([("size", Value::Int(50))])
        .find(["uri", "width", "height"])
        .unwrap();

    let user = Query::new("user")
        .filter([("id", Value::Int(12345))])
        .find([
            Selection::field("id"),
            Selection::alias("nickname", "name"),
            Selection::field("isViewerFriend"),
            Selection::Query(profile_picture.set_alias("image")),
        ])
        .unwrap();

    assert_tokens(
        &user.render(),
        r#"user( id:12345 ) {
            id, nickname : name, isViewerFriend,
            image : profilePicture( size:50 ) {
                uri, width, height } }"#,
    );
}

#[test]
fn nested_shorthand_matches_an_embedded_query() {
    let shorthand = Query::new("user")
        .find([Selection::nested("profilePicture", ["uri", "width", "height"]).unwrap()])
        .unwrap();
    assert_tokens(
        &shorthand.render(),
        "user { profilePicture { uri, width, height } }",
    );

    let embedded = Query::new("user")
        .find([Selection::Query(
            Query::new("profilePicture")
                .find(["uri", "width", "height"])
                .unwrap(),
        )])
        .unwrap();
    assert_eq!(shorthand.render(), embedded.render());
}

#[test]
fn groups_queries_under_a_parent() {
    let lee = Query::new("user")
        .filter([("id", Value::from("1"))])
        .set_alias("lee")
        .find(["name"])
        .unwrap();
    let sam = Query::new("user")
        .set_alias("sam")
        .filter([("id", Value::from("2"))])
        .find(["name"])
        .unwrap();
    let fetch = Query::new("FetchLeeAndSam").find([lee, sam]).unwrap();

    assert_tokens(
        &fetch.render(),
        r#"FetchLeeAndSam { lee: user(id: "1") { name },
                            sam: user(id: "2") { name } }"#,
    );
}

#[test]
fn serializes_nested_objects_and_lists() {
    let message_request = vec![
        ("type", Value::from("chat")),
        ("message", Value::from("yoyo")),
        (
            "user",
            Value::from(vec![
                ("name", Value::from("bob")),
                (
                    "screen",
                    Value::from(vec![
                        ("height", Value::Int(1080)),
                        ("width", Value::Int(1920)),
                    ]),
                ),
            ]),
        ),
        (
            "friends",
            Value::List(vec![
                Value::from(vec![("id", Value::Int(1)), ("name", Value::from("ann"))]),
                Value::from(vec![("id", Value::Int(2)), ("name", Value::from("tom"))]),
            ]),
        ),
    ];

    let message = Query::new("Message")
        .set_alias("myPost")
        .filter(message_request)
        .find([
            Selection::alias("messageId", "id"),
            Selection::alias("postedTime", "createTime"),
        ])
        .unwrap();

    assert_tokens(
        &message.render(),
        r#"myPost:Message(type:"chat",message:"yoyo",
                user:{name:"bob",screen:{height:1080,width:1920}},
                friends:[{id:1,name:"ann"},{id:2,name:"tom"}]) {
            messageId : id, postedTime : createTime }"#,
    );
}

#[test]
fn skips_empty_object_arguments() {
    let item = Query::new("inventory")
        .filter([
            ("toy", Value::from("jack in the box")),
            ("utils", Value::Object(ObjectValue::default())),
        ])
        .find(["id"])
        .unwrap();
    assert_tokens(&item.render(), r#"inventory(toy:"jack in the box") { id }"#);
}

#[test]
fn keeps_empty_objects_nested_inside_retained_arguments() {
    let item = Query::new("inventory").filter([(
        "config",
        Value::from(vec![("utils", Value::Object(ObjectValue::default()))]),
    )]);
    assert_tokens(&item.render(), "inventory(config: {utils: {}})");
}

#[test]
fn an_empty_filter_contributes_no_argument_clause() {
    let query = Query::new("x").filter(Vec::<(String, Value)>::new());
    assert_eq!(query.render(), "x");
}

#[test]
fn renders_enum_argument_values_unquoted() {
    let item = Query::new("inventory")
        .filter([("type", enum_value("missing").unwrap())])
        .find(["id"])
        .unwrap();
    assert_tokens(&item.render(), "inventory(type:missing) { id }");
}

#[test]
fn rejects_empty_enum_values() {
    let error = EnumValue::new("").unwrap_err();
    assert_eq!(error.error_type(), ErrorType::InvalidEnumValue);
    let error = enum_value(String::new()).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::InvalidEnumValue);
}

#[test]
fn rejects_an_empty_find() {
    let error = Query::new("x").find(Vec::<Selection>::new()).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::MissingSelection);

    let error = Selection::nested("profilePicture", Vec::<Selection>::new()).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::MissingSelection);
}

#[test]
fn render_is_idempotent() {
    let user = Query::new("user")
        .filter([("id", Value::Int(12345))])
        .find(["id", "name"])
        .unwrap();
    let first = user.render();
    let second = user.render();
    assert_eq!(first, second);
    assert_eq!(format!("{}", user), first);
}

#[test]
fn creates_a_mutation_document() {
    let mutation = Mutation::new(
        "addProduct",
        [("categoryId", "ID!"), ("productData", "ProductInput!")],
        [
            Selection::field("id"),
            Selection::field("title"),
            Selection::nested("category", ["id", "title"]).unwrap(),
            Selection::field("active"),
        ],
    );

    assert_tokens(
        &mutation.render().unwrap(),
        r#"addProduct($categoryId: ID!, $productData: ProductInput!) {
            addProduct(categoryId: $categoryId, productData: $productData) {
                id, title, category { id, title }, active
            }
        }"#,
    );

    assert_eq!(
        mutation.render().unwrap(),
        indoc::indoc! {r#"
            addProduct($categoryId: ID!, $productData: ProductInput!) {
              addProduct(categoryId: $categoryId, productData: $productData) { id, title, category { id, title }, active }
            }"#},
    );
}

#[test]
fn supports_mutation_aliases_and_selection_replacement() {
    let mut mutation = Mutation::new(
        "addProduct",
        [("categoryId", "ID!"), ("productData", "ProductInput!")],
        [
            Selection::field("id"),
            Selection::field("title"),
            Selection::nested("category", ["id", "title"]).unwrap(),
            Selection::field("active"),
        ],
    )
    .set_alias("product");
    mutation.find(["id", "title"]);

    assert_tokens(
        &mutation.render().unwrap(),
        r#"addProduct($categoryId: ID!, $productData: ProductInput!) {
            product: addProduct(categoryId: $categoryId, productData: $productData) {
                id, title
            }
        }"#,
    );
}

#[test]
fn renders_a_mutation_without_variables() {
    let mutation = Mutation::new(
        "resetCache",
        Vec::<(String, String)>::new(),
        ["clearedAt"],
    );
    assert_tokens(
        &mutation.render().unwrap(),
        "resetCache { resetCache { clearedAt } }",
    );
}

#[test]
fn defers_selection_validation_to_render() {
    // Storing an empty selection is fine at construction and replacement time.
    let mut mutation = Mutation::new(
        "addProduct",
        [("categoryId", "ID!")],
        Vec::<Selection>::new(),
    );
    let error = mutation.render().unwrap_err();
    assert_eq!(error.error_type(), ErrorType::MissingSelection);

    mutation.find(["id"]);
    assert_tokens(
        &mutation.render().unwrap(),
        "addProduct($categoryId: ID!) { addProduct(categoryId: $categoryId) { id } }",
    );

    mutation.find(Vec::<Selection>::new());
    let error = mutation.render().unwrap_err();
    assert_eq!(error.error_type(), ErrorType::MissingSelection);
}
