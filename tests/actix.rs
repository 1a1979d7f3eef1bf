use actix_web::http::header::{COOKIE, SET_COOKIE};
use actix_web::{test, web, App, HttpResponse, Responder};
use crumbs::crumbs_macros::cookie;
use crumbs::{CookieName, Definition, Registry};

#[cookie(name = "SID", domain = ".foo.bar", path = "/foo", http_only)]
pub struct Session;

async fn login() -> impl Responder {
    HttpResponse::Ok()
        .append_header(Definition::typed::<Session>("id"))
        .body("Logged in")
}
async fn whoami(cookies: Registry) -> impl Responder {
    match cookies.fetch_typed::<Session>() {
        Ok(session) => HttpResponse::Ok().body(session.value().to_string()),
        Err(error) => HttpResponse::Unauthorized().body(error.to_string()),
    }
}
async fn logout(cookies: Registry) -> impl Responder {
    let mut response = HttpResponse::Ok();
    if let Some(session) = cookies.get_typed::<Session>() {
        response.append_header(Definition::with_attributes(session.clone(), Session::attributes()).delete());
    }
    response.body("Logged out")
}

#[actix_web::test]
async fn cookie_round_trip() -> std::io::Result<()> {
    let app = test::init_service(
        App::new()
            .route("/login", web::post().to(login))
            .route("/whoami", web::get().to(whoami))
            .route("/logout", web::post().to(logout)),
    )
    .await;

    // registering cookies to the browser
    let request = test::TestRequest::post().uri("/login").to_request();
    let response = test::call_service(&app, request).await;
    let cookie_header = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();

    assert_eq!(cookie_header, "SID=id; Domain=.foo.bar; Path=/foo; HttpOnly");

    // getting back cookies from the browser
    let request = test::TestRequest::get()
        .insert_header((COOKIE, "theme=dark; SID=id"))
        .uri("/whoami")
        .to_request();
    let body = test::call_and_read_body(&app, request).await;

    assert_eq!(body, "id");

    // unknown cookie
    let request = test::TestRequest::get()
        .insert_header((COOKIE, "theme=dark"))
        .uri("/whoami")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    let body = test::read_body(response).await;
    assert_eq!(body, r#"No cookie named "SID" is registered"#);

    // remove cookies from the user browser
    let request = test::TestRequest::post()
        .insert_header((COOKIE, "SID=id"))
        .uri("/logout")
        .to_request();
    let response = test::call_service(&app, request).await;
    let cookie_header = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();

    assert_eq!(
        cookie_header,
        "SID=; Domain=.foo.bar; Path=/foo; HttpOnly; Expires=Thu, 01 Jan 1970 00:00:00 -0000"
    );

    Ok(())
}

#[actix_web::test]
async fn logout_without_session_sets_no_cookie() {
    let app = test::init_service(App::new().route("/logout", web::post().to(logout))).await;

    let request = test::TestRequest::post().uri("/logout").to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.headers().get(SET_COOKIE).is_none());
}
