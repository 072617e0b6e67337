//! Grupos: grupos e conselhos da Câmara.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/grupos",
        upstream_path: "grupos",
        category: "Grupos",
        description: "Lista de grupos e conselhos.",
        path_params: &[],
        query_params: &[QueryParam::int("id"), QueryParam::int("idLegislatura")],
    },
    Route {
        path: "/grupos/{id}",
        upstream_path: "grupos/{id}",
        category: "Grupos",
        description: "Detalhes de um grupo.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/grupos/{id}/membros",
        upstream_path: "grupos/{id}/membros",
        category: "Grupos",
        description: "Membros de um grupo.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
