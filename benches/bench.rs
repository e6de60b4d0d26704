use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures_util::future;
use hyper::{Body, Request, Response};
use treerouter::tree::Node;
use treerouter::{parse_route, Config, Handler, HandlerFuture, Method, Router};

struct Nop;

impl Handler for Nop {
    fn handle(&self, _: Request<Body>) -> HandlerFuture {
        Box::pin(future::ok::<_, hyper::Error>(Response::new(Body::empty())))
    }
}

fn static_tree() -> Node<u32> {
    let mut tree = Node::default();
    let paths = [
        "/",
        "/stuff",
        "/stuff/identities",
        "/stuff/identities/long/path",
        "/stuff1",
    ];
    for (i, path) in paths.iter().enumerate() {
        tree.add(parse_route("GET", path, i as u32)).unwrap();
    }
    tree
}

fn tree_static(c: &mut Criterion) {
    let tree = static_tree();

    c.bench_function("tree_static_root", |b| {
        b.iter(|| tree.resolve(Method::Get, black_box("/")))
    });
    c.bench_function("tree_static_long", |b| {
        b.iter(|| tree.resolve(Method::Get, black_box("/stuff/identities/long/path")))
    });
}

fn tree_dynamic(c: &mut Criterion) {
    let mut tree = Node::default();
    tree.add(parse_route("GET", "/users/:id", 1)).unwrap();
    tree.add(parse_route("GET", "/users/:id/friends/:friend", 2)).unwrap();
    tree.add(parse_route("GET", "/users/*", 3)).unwrap();

    c.bench_function("tree_variable", |b| {
        b.iter(|| tree.resolve(Method::Get, black_box("/users/42/friends/7")))
    });
    c.bench_function("tree_wildcard_fallback", |b| {
        b.iter(|| tree.resolve(Method::Get, black_box("/users/42/photos/2021/july")))
    });
}

fn router(c: &mut Criterion) {
    let router = Router::require(
        Config::default()
            .add_route("GET", "/child1/node/", Nop)
            .add_route("GET", "/child2/node", Nop)
            .add_route("GET", "/child3/node", Nop)
            .add_route("GET", "/path", Nop),
    );

    c.bench_function("router_dispatch", |b| {
        b.iter(|| {
            let req = Request::get("/path").body(Body::empty()).unwrap();
            black_box(router.serve(req))
        })
    });
}

criterion_group!(benches, tree_static, tree_dynamic, router);
criterion_main!(benches);
