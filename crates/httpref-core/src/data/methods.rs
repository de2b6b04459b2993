use crate::reference::Reference;

pub static METHODS: &[Reference] = &[
    Reference::new(
        "GET",
        "Requests a representation of the specified resource",
        "The GET method requests a representation of the specified resource. \
         Requests using GET should only be used to request data and should not \
         contain a body.\n\n\
         Request has body: No. Successful response has body: Yes. Safe: Yes. \
         Idempotent: Yes. Cacheable: Yes. Allowed in HTML forms: Yes.\n\n\
         Sending body content in a GET request is not forbidden by the \
         specification, but it has no defined semantics. Some servers reject \
         such requests, and intermediaries may strip the body.",
    ),
    Reference::new(
        "HEAD",
        "Asks for a response identical to GET, but without the body",
        "The HEAD method requests the headers that would be returned if the \
         same resource were requested with GET. A response to a HEAD request \
         must not have a body; if it does, the body is ignored.\n\n\
         It is useful for checking what a GET request would return before \
         downloading a large resource, for example to inspect Content-Length \
         or Last-Modified.\n\n\
         Request has body: No. Successful response has body: No. Safe: Yes. \
         Idempotent: Yes. Cacheable: Yes. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "POST",
        "Submits an entity to the specified resource",
        "The POST method sends data to the server. The type of the body is \
         indicated by the Content-Type header. A POST often causes a change in \
         state or side effects on the server.\n\n\
         Unlike PUT, POST is not idempotent: sending an identical POST request \
         several times may create the same resource several times, such as \
         placing an order more than once.\n\n\
         HTML forms send POST bodies as application/x-www-form-urlencoded, \
         multipart/form-data or text/plain, selected with the enctype \
         attribute of the form element.\n\n\
         Request has body: Yes. Successful response has body: Yes. Safe: No. \
         Idempotent: No. Cacheable: Only if freshness information is \
         included. Allowed in HTML forms: Yes.",
    ),
    Reference::new(
        "PUT",
        "Replaces all current representations of the target resource",
        "The PUT method creates a new resource or replaces a representation \
         of the target resource with the request content.\n\n\
         PUT is idempotent: calling it once or several times in a row has the \
         same effect, whereas successive identical POST requests may have \
         additional effects.\n\n\
         If the target resource does not have a current representation and \
         PUT creates one, the origin server must answer with 201 Created. If \
         an existing representation is modified, 200 OK or 204 No Content \
         indicate success.\n\n\
         Request has body: Yes. Successful response has body: May. Safe: No. \
         Idempotent: Yes. Cacheable: No. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "DELETE",
        "Deletes the specified resource",
        "The DELETE method asks the server to delete the specified resource.\n\n\
         A successful response is 202 Accepted if the action will likely \
         succeed but has not yet been enacted, 204 No Content if it has been \
         enacted and no further information is to be supplied, or 200 OK if \
         it has been enacted and the response includes a message describing \
         the status.\n\n\
         Request has body: May. Successful response has body: May. Safe: No. \
         Idempotent: Yes. Cacheable: No. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "CONNECT",
        "Establishes a tunnel to the server identified by the target resource",
        "The CONNECT method starts two-way communication with the requested \
         resource. It is typically used to open a tunnel through a proxy so \
         that a client can reach an HTTPS site.\n\n\
         The target of a CONNECT request is written in authority form, a \
         host name and port separated by a colon, for example \
         developer.mozilla.org:443.\n\n\
         Request has body: No. Successful response has body: Yes. Safe: No. \
         Idempotent: No. Cacheable: No. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "OPTIONS",
        "Describes the communication options for the target resource",
        "The OPTIONS method requests permitted communication options for a \
         given URL or server. A client can specify a URL, or an asterisk to \
         refer to the entire server.\n\n\
         Browsers send an OPTIONS request as a CORS preflight to ask the \
         server whether the actual request is acceptable, using the \
         Access-Control-Request-Method and Access-Control-Request-Headers \
         headers.\n\n\
         Request has body: No. Successful response has body: May. Safe: Yes. \
         Idempotent: Yes. Cacheable: No. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "TRACE",
        "Performs a message loop-back test along the path to the target resource",
        "The TRACE method performs a message loop-back test along the path to \
         the target resource, providing a useful debugging mechanism.\n\n\
         The final recipient of the request reflects the message received, \
         excluding some fields, back to the client as the body of a 200 OK \
         response with a Content-Type of message/http. The final recipient is \
         either the origin server or the first server to receive a \
         Max-Forwards value of 0.\n\n\
         Request has body: No. Successful response has body: No. Safe: Yes. \
         Idempotent: Yes. Cacheable: No. Allowed in HTML forms: No.",
    ),
    Reference::new(
        "PATCH",
        "Applies partial modifications to a resource",
        "The PATCH method applies partial modifications to a resource. A PATCH \
         is a set of instructions for modifying a resource, whereas PUT is a \
         complete representation of it.\n\n\
         PATCH is not necessarily idempotent, although it can be. Two \
         identical PATCH requests that each append to a list, for instance, \
         leave the resource in different states.\n\n\
         A server advertises support for PATCH by listing it in the Allow or \
         Access-Control-Allow-Methods headers, and the accepted patch formats \
         in Accept-Patch.\n\n\
         Request has body: Yes. Successful response has body: May. Safe: No. \
         Idempotent: No. Cacheable: Only if freshness information is \
         included. Allowed in HTML forms: No.",
    ),
];
